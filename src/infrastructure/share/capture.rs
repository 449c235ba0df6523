use crate::constants::{SHARE_MESSAGE, SHARE_TITLE};
use crate::core::errors::SettleError;
use crate::core::summary::SettlementSummary;
use crate::infrastructure::share::{Capture, ShareArtifact};
use crate::visualization::Visualization;
use async_trait::async_trait;

/// Captures the summary as an SVG table. Rasterizing to PNG is left to the
/// platform share collaborator.
#[derive(Clone, Debug)]
pub struct SvgCapture {
    currency_unit: String,
}

impl SvgCapture {
    pub fn new(currency_unit: impl Into<String>) -> Self {
        SvgCapture {
            currency_unit: currency_unit.into(),
        }
    }
}

#[async_trait]
impl Capture for SvgCapture {
    async fn capture(&self, summary: &SettlementSummary) -> Result<ShareArtifact, SettleError> {
        if summary.rounds.is_empty() {
            return Err(SettleError::CaptureError("nothing to capture".to_string()));
        }
        let svg = Visualization::render_svg(summary, &self.currency_unit);
        Ok(ShareArtifact {
            title: SHARE_TITLE.to_string(),
            message: SHARE_MESSAGE.to_string(),
            content_type: "image/svg+xml".to_string(),
            file_extension: "svg".to_string(),
            bytes: svg.into_bytes(),
        })
    }
}
