//! Interactive menu loop.

use std::io::{BufRead, Write};

use anyhow::Result;
use pity_core::{PityCounters, PityState, PullOutcome, RandomSource, Rules};
use pity_runtime::{BaseRates, ProbabilityTable, PullService, StateReport, StateRepository};

use crate::input::Console;
use crate::presentation;

/// Whether the loop keeps running after an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Unwraps a console answer, leaving the loop on EOF.
macro_rules! answer {
    ($read:expr) => {
        match $read? {
            Some(value) => value,
            None => return Ok(Flow::Exit),
        }
    };
}

pub struct Menu<S, R, W>
where
    S: StateRepository,
{
    rules: Rules,
    service: PullService<S>,
    console: Console<R, W>,
    rng: Box<dyn RandomSource>,
    table_rows: u32,
    current: Option<PityState>,
}

impl<S, R, W> Menu<S, R, W>
where
    S: StateRepository,
    R: BufRead,
    W: Write,
{
    pub fn new(
        service: PullService<S>,
        console: Console<R, W>,
        rng: Box<dyn RandomSource>,
        table_rows: u32,
    ) -> Self {
        Self {
            rules: *service.rules(),
            service,
            console,
            rng,
            table_rows,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&PityState> {
        self.current.as_ref()
    }

    /// Runs until the user exits or stdin closes.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.console.writer(), "\nWelcome to the Pity Calculator!")?;
        self.restore_saved_state()?;

        loop {
            self.show_menu()?;
            let Some(choice) = self.console.line("\nChoose an option (1-9): ")? else {
                break;
            };

            let flow = match choice.as_str() {
                "1" => self.base_rates()?,
                "2" => self.enter_state()?,
                "3" => self.upcoming_probability()?,
                "4" => self.simulate_tie_break()?,
                "5" => self.featured_guarantee()?,
                "6" => self.soft_pity_table()?,
                "7" => self.record_pull()?,
                "8" => self.load_save()?,
                "9" => {
                    writeln!(self.console.writer(), "\nThank you for using the Pity Calculator!")?;
                    Flow::Exit
                }
                _ => {
                    presentation::error(self.console.writer(), "Invalid option. Choose 1-9.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        tracing::info!("Session ended");
        Ok(())
    }

    fn restore_saved_state(&mut self) -> Result<()> {
        match self.service.repository().load() {
            Ok(Some(state)) => {
                tracing::info!(
                    pulls_since_rare = state.pulls_since_rare(),
                    banner_pulls = state.banner_pulls(),
                    "Restored saved state"
                );
                self.current = Some(state);
                writeln!(self.console.writer(), "Loaded saved state from previous session.")?;
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!("Failed to load saved state: {}", err);
                writeln!(
                    self.console.writer(),
                    "Warning: saved state could not be loaded ({err}). Starting fresh."
                )?;
            }
        }
        Ok(())
    }

    fn show_menu(&mut self) -> Result<()> {
        let w = self.console.writer();
        presentation::header(w, "PITY CALCULATOR")?;
        writeln!(w, "1. View rates and pity system")?;
        writeln!(w, "2. Enter current state")?;
        writeln!(w, "3. Rare probability for upcoming pulls")?;
        writeln!(w, "4. Simulate 50/50 result")?;
        writeln!(w, "5. Featured guarantee status")?;
        writeln!(w, "6. View soft pity table")?;
        writeln!(w, "7. Record a minor/common pull")?;
        writeln!(w, "8. Load/Save state")?;
        writeln!(w, "9. Exit")?;
        writeln!(w, "{}", "=".repeat(60))?;
        Ok(())
    }

    /// Current snapshot, or a hint to enter one first.
    fn require_state(&mut self) -> Result<Option<PityState>> {
        if self.current.is_none() {
            presentation::error(
                self.console.writer(),
                "Enter your current state first (option 2).",
            )?;
        }
        Ok(self.current)
    }

    fn base_rates(&mut self) -> Result<Flow> {
        presentation::base_rates(self.console.writer(), &BaseRates::from_rules(&self.rules))?;
        Ok(Flow::Continue)
    }

    fn enter_state(&mut self) -> Result<Flow> {
        writeln!(self.console.writer(), "\n--- ENTER YOUR CURRENT STATE ---")?;
        let rules = self.rules;

        let pulls_since_rare = answer!(self.console.integer(
            &format!("Pulls since last rare (0-{}): ", rules.hard_pity),
            0..=rules.hard_pity,
        ));
        let banner_pulls = answer!(
            self.console
                .integer("Pulls on this banner: ", 0..=u32::MAX)
        );
        let total_pulls = answer!(self.console.integer(
            &format!("Total pulls (at least {banner_pulls}): "),
            banner_pulls..=u32::MAX,
        ));
        let pulls_since_minor = answer!(self.console.integer(
            &format!(
                "Pulls since last minor (0-{}): ",
                rules.minor_guarantee_window
            ),
            0..=rules.minor_guarantee_window,
        ));

        let counters = PityCounters {
            pulls_since_rare,
            pulls_since_minor,
            banner_pulls,
            total_pulls,
        };
        let state = match PityState::new(&rules, counters) {
            Ok(state) => state,
            Err(err) => {
                presentation::error(self.console.writer(), err)?;
                return Ok(Flow::Continue);
            }
        };

        self.current = Some(state);
        presentation::state_report(self.console.writer(), &StateReport::compute(&rules, &state))?;
        self.save(&state)?;
        Ok(Flow::Continue)
    }

    fn upcoming_probability(&mut self) -> Result<Flow> {
        let Some(state) = self.require_state()? else {
            return Ok(Flow::Continue);
        };

        let rows = answer!(self.console.integer(
            &format!("\nHow many upcoming pulls (1-{})? ", self.rules.hard_pity),
            1..=self.rules.hard_pity,
        ));
        let table = ProbabilityTable::upcoming(&self.rules, state.pulls_since_rare(), rows);
        presentation::probability_table(
            self.console.writer(),
            "UPCOMING PULLS PROBABILITY",
            &table,
        )?;
        Ok(Flow::Continue)
    }

    fn simulate_tie_break(&mut self) -> Result<Flow> {
        let Some(state) = self.require_state()? else {
            return Ok(Flow::Continue);
        };

        if !state.is_at_hard_pity(&self.rules) {
            presentation::error(
                self.console.writer(),
                format!(
                    "Not at hard pity ({} pulls). The 50/50 only triggers at hard pity.",
                    self.rules.hard_pity
                ),
            )?;
            return Ok(Flow::Continue);
        }

        let won = if state.is_at_featured_guarantee(&self.rules) {
            true
        } else {
            answer!(self.console.confirm("\nDid you win the 50/50? (y/n): "))
        };

        match self.service.simulate(&state, won, self.rng.as_mut()) {
            Ok(report) => {
                self.current = Some(report.state);
                presentation::simulation(self.console.writer(), &report)?;
            }
            Err(err) => {
                tracing::warn!("Simulation failed: {}", err);
                presentation::service_error(self.console.writer(), &err)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn featured_guarantee(&mut self) -> Result<Flow> {
        let Some(state) = self.require_state()? else {
            return Ok(Flow::Continue);
        };

        let report = StateReport::compute(&self.rules, &state);
        let w = self.console.writer();
        presentation::header(w, "FEATURED GUARANTEE")?;
        writeln!(w, "\nCurrent banner pulls: {}", report.banner_pulls)?;
        writeln!(w, "Pulls to featured guarantee: {}", report.pulls_to_featured)?;
        if report.at_featured_guarantee {
            writeln!(w, "\nFeatured guarantee active: your next rare is the featured one.")?;
        } else {
            writeln!(
                w,
                "\nYou need {} more banner pulls to guarantee the featured rare.",
                report.pulls_to_featured
            )?;
        }
        Ok(Flow::Continue)
    }

    fn soft_pity_table(&mut self) -> Result<Flow> {
        let table = ProbabilityTable::soft_pity(&self.rules, self.table_rows);
        presentation::probability_table(
            self.console.writer(),
            "SOFT PITY TABLE - RARE PROBABILITY",
            &table,
        )?;
        Ok(Flow::Continue)
    }

    fn record_pull(&mut self) -> Result<Flow> {
        let Some(state) = self.require_state()? else {
            return Ok(Flow::Continue);
        };

        if state.is_at_hard_pity(&self.rules) {
            presentation::error(
                self.console.writer(),
                "At hard pity the next pull is rare. Use option 4.",
            )?;
            return Ok(Flow::Continue);
        }

        let minor = answer!(self.console.confirm("\nWas it a minor-tier pull? (y/n): "));
        let outcome = if minor {
            PullOutcome::minor()
        } else {
            PullOutcome::common()
        };

        match self.service.record(&state, &outcome) {
            Ok(next) => {
                self.current = Some(next);
                presentation::state_report(
                    self.console.writer(),
                    &StateReport::compute(&self.rules, &next),
                )?;
            }
            Err(err) => {
                tracing::warn!("Recording pull failed: {}", err);
                presentation::service_error(self.console.writer(), &err)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn load_save(&mut self) -> Result<Flow> {
        let w = self.console.writer();
        presentation::header(w, "LOAD/SAVE STATE")?;
        writeln!(w, "1. Load state")?;
        writeln!(w, "2. Save current state")?;
        writeln!(w, "3. Delete saved state")?;
        writeln!(w, "4. Back")?;

        let choice = answer!(self.console.line("\nChoose an option: "));
        match choice.as_str() {
            "1" => match self.service.repository().load() {
                Ok(Some(state)) => {
                    self.current = Some(state);
                    writeln!(self.console.writer(), "\nState loaded.")?;
                    presentation::state_report(
                        self.console.writer(),
                        &StateReport::compute(&self.rules, &state),
                    )?;
                }
                Ok(None) => writeln!(self.console.writer(), "\nNo saved state found.")?,
                Err(err) => {
                    tracing::warn!("Failed to load saved state: {}", err);
                    presentation::error(self.console.writer(), err)?;
                }
            },
            "2" => match self.current {
                Some(state) => self.save(&state)?,
                None => presentation::error(
                    self.console.writer(),
                    "No state to save. Enter your state first (option 2).",
                )?,
            },
            "3" => {
                let sure = answer!(
                    self.console
                        .confirm("Delete the saved state? (y/n): ")
                );
                if sure {
                    match self.service.repository().delete() {
                        Ok(()) => {
                            tracing::info!("Deleted saved state");
                            writeln!(self.console.writer(), "\nSaved state deleted.")?;
                        }
                        Err(err) => presentation::error(self.console.writer(), err)?,
                    }
                }
            }
            _ => {}
        }
        Ok(Flow::Continue)
    }

    fn save(&mut self, state: &PityState) -> Result<()> {
        match self.service.repository().save(state) {
            Ok(()) => writeln!(self.console.writer(), "\nState saved.")?,
            Err(err) => {
                tracing::warn!("Failed to save state: {}", err);
                presentation::error(self.console.writer(), err)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pity_core::ScriptedSource;
    use pity_runtime::InMemoryStateRepo;

    fn run(repo: InMemoryStateRepo, input: &str) -> (Option<PityState>, String) {
        let rules = Rules::default();
        let console = Console::new(input.as_bytes(), Vec::new());
        let mut menu = Menu::new(
            PullService::new(rules, repo),
            console,
            Box::new(ScriptedSource::new([0.95])),
            5,
        );
        menu.run().unwrap();
        let current = menu.current().copied();
        let output = String::from_utf8(menu.console.writer().clone()).unwrap();
        (current, output)
    }

    fn at_hard_pity() -> PityState {
        PityState::new(
            &Rules::default(),
            PityCounters {
                pulls_since_rare: 80,
                pulls_since_minor: 2,
                banner_pulls: 80,
                total_pulls: 80,
            },
        )
        .unwrap()
    }

    #[test]
    fn eof_exits_cleanly() {
        let (current, output) = run(InMemoryStateRepo::new(), "");
        assert_eq!(current, None);
        assert!(output.contains("PITY CALCULATOR"));
    }

    #[test]
    fn entering_state_saves_it() {
        let (current, output) = run(InMemoryStateRepo::new(), "2\n70\n100\n150\n4\n9\n");
        let state = current.unwrap();
        assert_eq!(state.pulls_since_rare(), 70);
        assert_eq!(state.total_pulls(), 150);
        assert!(output.contains("State saved."));
        assert!(output.contains("In soft pity"));
    }

    #[test]
    fn state_entry_reprompts_on_bad_values() {
        let (current, output) = run(InMemoryStateRepo::new(), "2\n81\n10\n5\n4\n6\n3\n9\n");
        let state = current.unwrap();
        assert_eq!(state.pulls_since_rare(), 10);
        assert_eq!(state.banner_pulls(), 5);
        assert_eq!(state.total_pulls(), 6);
        assert_eq!(state.pulls_since_minor(), 3);
        assert!(output.contains("between 0 and 80"));
        assert!(output.contains("at least 5"));
    }

    #[test]
    fn options_needing_state_ask_for_it() {
        let (_, output) = run(InMemoryStateRepo::new(), "4\n9\n");
        assert!(output.contains("Enter your current state first"));
    }

    #[test]
    fn saved_state_is_restored_and_simulated() {
        let repo = InMemoryStateRepo::with_state(at_hard_pity());
        let (current, output) = run(repo, "4\nn\n9\n");
        assert!(output.contains("Loaded saved state"));
        assert!(output.contains("standard rare"));
        let state = current.unwrap();
        assert_eq!(state.pulls_since_rare(), 0);
        assert_eq!(state.banner_pulls(), 81);
    }

    #[test]
    fn simulation_below_hard_pity_is_refused() {
        let (_, output) = run(InMemoryStateRepo::new(), "2\n20\n20\n20\n0\n4\n9\n");
        assert!(output.contains("Not at hard pity"));
    }

    #[test]
    fn recording_a_minor_pull_resets_minor_pity() {
        let (current, _) = run(InMemoryStateRepo::new(), "2\n20\n20\n20\n7\n7\ny\n9\n");
        let state = current.unwrap();
        assert_eq!(state.pulls_since_rare(), 21);
        assert_eq!(state.pulls_since_minor(), 0);
    }

    #[test]
    fn soft_pity_table_uses_configured_rows() {
        let (_, output) = run(InMemoryStateRepo::new(), "6\n9\n");
        assert!(output.contains("SOFT PITY TABLE"));
        // Five probability cells plus the first cumulative cell.
        assert_eq!(output.matches("0.80%").count(), 6);
    }

    #[test]
    fn delete_clears_the_repository() {
        let repo = InMemoryStateRepo::with_state(at_hard_pity());
        let (_, output) = run(repo, "8\n3\ny\n8\n1\n9\n");
        assert!(output.contains("Saved state deleted."));
        assert!(output.contains("No saved state found."));
    }
}
