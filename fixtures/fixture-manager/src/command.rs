// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::Parser;
use color_eyre::{eyre::bail, Result};
use fixture_details::AllFixtures;
use log::LevelFilter;
use qm_min::{cover::Cover, logic_function::LogicFunction, options::MinimizeOptions};
use simplelog::{ColorChoice, TermLogger, TerminalMode};

#[derive(Debug, Parser)]
pub struct FixtureManagerApp {
    /// Print debug logs from the minimizer.
    #[clap(long, short, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: FixtureManagerCommand,
}

#[derive(Debug, Parser)]
pub enum FixtureManagerCommand {
    /// List all named fixtures.
    List,
    /// Minimize a named fixture and print its cover.
    Show { name: String },
    /// Verify every named fixture.
    VerifyAll,
    /// Minimize a function given on the command line.
    Minimize {
        /// Comma-separated variable names, most significant first.
        #[clap(long, use_value_delimiter = true, required = true)]
        vars: Vec<String>,

        /// Values where the function is true.
        on_set: Vec<u32>,

        #[clap(long, default_value_t = MinimizeOptions::DEFAULT_MAX_RESIDUAL_IMPLICANTS)]
        max_residual: usize,
    },
    /// Minimize seeded random functions and check them against their truth tables.
    CheckRandom {
        #[clap(long, short, default_value_t = 64)]
        count: usize,

        #[clap(long, default_value_t = 4)]
        variables: usize,

        #[clap(long, default_value = "qm-min")]
        seed: String,

        #[clap(long, default_value_t = MinimizeOptions::DEFAULT_MAX_RESIDUAL_IMPLICANTS)]
        max_residual: usize,
    },
}

impl FixtureManagerApp {
    pub fn exec(self) -> Result<()> {
        let level = if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        };
        TermLogger::init(
            level,
            simplelog::Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        )?;

        self.command.exec()
    }
}

impl FixtureManagerCommand {
    pub fn exec(self) -> Result<()> {
        match self {
            Self::List => {
                for fixture in AllFixtures::get().fixtures() {
                    println!(
                        "{:<20} {} ({})",
                        fixture.name(),
                        fixture.description(),
                        fixture.expected()
                    );
                }
                Ok(())
            }
            Self::Show { name } => {
                let fixture = match AllFixtures::get().fixture(&name) {
                    Some(fixture) => fixture,
                    None => bail!("unknown fixture: {}", name),
                };
                let cover = fixture.verify()?;
                print_cover(cover);
                Ok(())
            }
            Self::VerifyAll => {
                AllFixtures::get().verify_all()?;
                println!("all fixtures verified");
                Ok(())
            }
            Self::Minimize {
                vars,
                on_set,
                max_residual,
            } => {
                check_max_residual(max_residual)?;
                let function = LogicFunction::new(vars, on_set)?.with_options(
                    MinimizeOptions::new().with_max_residual_implicants(max_residual),
                );
                let cover = function.minimize()?;
                print_cover(cover);
                Ok(())
            }
            Self::CheckRandom {
                count,
                variables,
                seed,
                max_residual,
            } => {
                check_max_residual(max_residual)?;
                let summary = AllFixtures::check_random(variables, count, &seed, max_residual)?;
                println!("{}", summary);
                Ok(())
            }
        }
    }
}

fn check_max_residual(max_residual: usize) -> Result<()> {
    if max_residual > MinimizeOptions::MAX_RESIDUAL_IMPLICANTS_CEILING {
        bail!(
            "--max-residual must be at most {}",
            MinimizeOptions::MAX_RESIDUAL_IMPLICANTS_CEILING
        );
    }
    Ok(())
}

fn print_cover(cover: &Cover) {
    print!("{}", cover.matrix_display().with_covered(true));
    println!("{}", cover.expression_display());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimize() {
        let app = FixtureManagerApp::try_parse_from([
            "fixture-manager",
            "minimize",
            "--vars",
            "A,B,C",
            "1",
            "3",
            "7",
        ])
        .expect("arguments parse");
        match app.command {
            FixtureManagerCommand::Minimize {
                vars,
                on_set,
                max_residual,
            } => {
                assert_eq!(vars, vec!["A", "B", "C"]);
                assert_eq!(on_set, vec![1, 3, 7]);
                assert_eq!(max_residual, 20);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_check_random() {
        let app = FixtureManagerApp::try_parse_from([
            "fixture-manager",
            "-v",
            "check-random",
            "--count",
            "8",
        ])
        .expect("arguments parse");
        assert!(app.verbose);
        assert!(matches!(
            app.command,
            FixtureManagerCommand::CheckRandom { count: 8, variables: 4, .. }
        ));
    }

    #[test]
    fn test_max_residual_ceiling() {
        assert!(check_max_residual(63).is_ok());
        assert!(check_max_residual(64).is_err());
    }
}
