use rand::SeedableRng;
use rand::rngs::StdRng;
use splitround::config::CONFIG;
use splitround::core::models::{Notice, Participant};
use splitround::core::services::{RegistryService, ShareService};
use splitround::core::session::Settlement;
use splitround::infrastructure::share::ShareTarget;
use splitround::infrastructure::share::capture::SvgCapture;
use splitround::infrastructure::share::file::FileShareTarget;
use splitround::infrastructure::storage::file::FileKeyValueStore;
use splitround::infrastructure::storage::participants::ParticipantRepository;
use splitround::infrastructure::storage::worker::PersistenceWorker;
use splitround::visualization::Visualization;
use splitround::SettleError;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

const HELP: &str = "\
commands:
  members                     list participants
  add <name>                  add a participant
  remove <name>               remove a participant
  rounds                      list rounds
  round                       add a round
  title <n> <title>           rename round n
  amount <n> <amount>         set the amount of round n
  select <n> <a,b,...>        choose the members of round n
  random <n>                  split round n randomly
  reset <n>                   back to even split for round n
  delete <n>                  delete round n
  summary                     per-person breakdown
  chart                       totals as chart config
  share                       capture and share the summary
  quit";

struct App<T: ShareTarget> {
    registry: RegistryService,
    settlement: Settlement,
    share: ShareService<SvgCapture, T>,
    rng: StdRng,
}

impl<T: ShareTarget> App<T> {
    async fn handle(&mut self, line: &str) -> Result<Option<String>, SettleError> {
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();
        let output = match command {
            "help" => HELP.to_string(),
            "members" => self.registry.registry().names().join(", "),
            "add" => {
                let notice = self.registry.add(rest)?;
                self.sync();
                render_notice(&notice)
            }
            "remove" => match self.registry.remove(rest) {
                Some(notice) => {
                    self.sync();
                    render_notice(&notice)
                }
                None => String::new(),
            },
            "rounds" => self.list_rounds(),
            "round" => {
                self.settlement = self.settlement.add_round(self.registry.registry());
                self.list_rounds()
            }
            "title" => {
                let (id, title) = self.round_arg(rest)?;
                self.settlement = self.settlement.rename_round(&id, title)?;
                self.list_rounds()
            }
            "amount" => {
                let (id, text) = self.round_arg(rest)?;
                self.settlement = self.settlement.set_amount_text(&id, text)?;
                self.list_rounds()
            }
            "select" => {
                let (id, names) = self.round_arg(rest)?;
                let members: Vec<Participant> = names
                    .split(',')
                    .filter_map(|n| Participant::parse(n).ok())
                    .collect();
                self.settlement = self
                    .settlement
                    .select_members(&id, &members, self.registry.registry())?;
                self.list_rounds()
            }
            "random" => {
                let (id, _) = self.round_arg(rest)?;
                self.settlement = self.settlement.randomize(&id, &mut self.rng)?;
                self.list_rounds()
            }
            "reset" => {
                let (id, _) = self.round_arg(rest)?;
                self.settlement = self.settlement.reset(&id)?;
                self.list_rounds()
            }
            "delete" => {
                let (id, _) = self.round_arg(rest)?;
                self.settlement = self.settlement.delete_round(&id)?;
                render_notice(&Notice::success("Round deleted."))
            }
            "summary" => self
                .settlement
                .summary(self.registry.registry())
                .render_text(&CONFIG.currency_unit),
            "chart" => {
                let summary = self.settlement.summary(self.registry.registry());
                Visualization::generate_totals_chart(&summary).to_string()
            }
            "share" => {
                let summary = self.settlement.summary(self.registry.registry());
                self.share.share_summary(&summary).await?;
                render_notice(&Notice::success("Settlement shared."))
            }
            "quit" | "exit" => return Ok(None),
            "" => String::new(),
            other => format!("unknown command '{}', try 'help'", other),
        };
        Ok(Some(output))
    }

    fn sync(&mut self) {
        self.settlement = self.settlement.sync_registry(self.registry.registry());
    }

    /// Splits "<n> <rest>" and resolves the 1-based round number to its id.
    fn round_arg<'a>(&self, args: &'a str) -> Result<(String, &'a str), SettleError> {
        let (index, rest) = args.split_once(' ').unwrap_or((args, ""));
        let round = index
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| self.settlement.rounds().get(i))
            .ok_or_else(|| SettleError::RoundNotFound(index.to_string()))?;
        Ok((round.id.clone(), rest.trim()))
    }

    fn list_rounds(&self) -> String {
        self.settlement
            .rounds()
            .iter()
            .enumerate()
            .map(|(i, round)| {
                let members: Vec<&str> = round.members.iter().map(|m| m.as_str()).collect();
                let split = if round.has_custom_split() {
                    round
                        .members
                        .iter()
                        .filter_map(|m| round.share_for(m).map(|a| format!("{}={}", m, a)))
                        .collect::<Vec<_>>()
                        .join(" ")
                } else {
                    format!("{} each", round.per_person())
                };
                format!(
                    "{}. {} | {} | [{}] | {}",
                    i + 1,
                    round.title,
                    round.amount,
                    members.join(", "),
                    split
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn render_notice(notice: &Notice) -> String {
    format!("[{}] {}", notice.level, notice.message)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(CONFIG.log_level.as_str())
        .with_writer(std::io::stderr)
        .init();
    info!("Starting with {:?}", *CONFIG);

    let repository = Arc::new(ParticipantRepository::new(FileKeyValueStore::new(
        CONFIG.data_dir.clone(),
    )));
    let (queue, worker) = PersistenceWorker::spawn(Arc::clone(&repository));

    let mut registry = RegistryService::new(queue);
    registry.load(&*repository).await;
    let settlement = Settlement::new(registry.registry(), CONFIG.initial_rounds);

    let mut app = App {
        registry,
        settlement,
        share: ShareService::new(
            SvgCapture::new(CONFIG.currency_unit.clone()),
            FileShareTarget::new(CONFIG.share_dir.clone()),
        ),
        rng: StdRng::from_entropy(),
    };

    println!("{}", HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match app.handle(line.trim()).await {
            Ok(Some(output)) if !output.is_empty() => println!("{}", output),
            Ok(Some(_)) => {}
            Ok(None) => break,
            Err(e) => {
                warn!("{}", e);
                println!("{}", render_notice(&Notice::from(&e)));
            }
        }
    }

    // Dropping the app closes the persist queue; wait for pending writes.
    drop(app);
    worker.await?;
    Ok(())
}
