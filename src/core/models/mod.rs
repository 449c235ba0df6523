pub mod group;
pub mod notice;
pub mod participant;
pub mod round;

pub use group::SettlementGroup;
pub use notice::{Notice, NoticeLevel};
pub use participant::Participant;
pub use round::{MemberAmounts, SettlementRound, ordinal_title};
