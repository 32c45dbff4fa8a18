//! # Introduction
//!
//! `sortviz` animates comparison-based sorting algorithms in the terminal. Every element of an
//! array is drawn as a bar whose length encodes its value, and every swap the algorithm performs
//! is paced by a configurable delay so the algorithm can be watched working step by step.
//!
//! The animated engine lives in [`engine`]: four sorting strategies (insertion, selection, quick
//! and heap sort) expressed as asynchronous step sequences over a shared array, where the single
//! swap primitive is the only mutator and the only suspension point. The [`view`] module holds the
//! rendering boundary and a terminal implementation of it, and [`generate`] produces the initial
//! bar layouts.
//!
//! # Example
//!
//! ```
//! use sortviz::engine::{Algorithm, Session};
//! use sortviz::view::NullView;
//!
//! let mut session = Session::new(vec![3, 1, 2], 0);
//! session.select(Algorithm::Insertion.sorter());
//!
//! tokio::runtime::Builder::new_current_thread()
//!     .enable_time()
//!     .build()
//!     .unwrap()
//!     .block_on(session.run(&mut NullView))
//!     .unwrap();
//!
//! assert_eq!(session.bars(), [1, 2, 3]);
//! ```

pub mod engine;
pub mod generate;
pub mod view;

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use colored::Colorize;

use engine::{Algorithm, Session};
use view::TermView;

/// Animate sorting algorithms on the commandline. Run `sortviz --help` to see what options are
/// available.
#[derive(Debug, Args)]
#[command(flatten_help = true, subcommand_required = true)]
pub struct SortvizArgs {
    #[command(subcommand)]
    command: SortvizCommands,
}

#[derive(Clone, Subcommand, Debug)]
#[command(arg_required_else_help = true)]
enum SortvizCommands {
    /// Generate a bar layout and animate sorting it with the chosen algorithm.
    Run {
        /// Sorting algorithm to animate.
        #[arg(short, long, value_enum)]
        algorithm: Algorithm,

        /// Delay in milliseconds inserted after every swap.
        #[arg(short, long, default_value_t = 10)]
        speed: u64,

        /// Initial bar layout to generate.
        #[arg(short, long, value_enum, default_value = "step")]
        bars: Layout,
    },

    /// Generate a bar layout and animate shuffling it.
    Shuffle {
        /// Delay in milliseconds inserted after every swap.
        #[arg(short, long, default_value_t = 10)]
        speed: u64,

        /// Initial bar layout to generate.
        #[arg(short, long, value_enum, default_value = "step")]
        bars: Layout,
    },
}

/// The shape of a freshly generated array.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Layout {
    /// Bars of uniformly random heights.
    Random,
    /// Bars that form a staircase once sorted, handed out pre-shuffled.
    Step,
}

impl Layout {
    fn bars(self) -> Vec<u32> {
        match self {
            Layout::Random => generate::random_bars(),
            Layout::Step => generate::step_bars(),
        }
    }
}

impl SortvizArgs {
    pub fn run(self) -> Result<()> {
        // The engine is cooperatively scheduled with the swap delay as its only suspension
        // point, so a single-threaded runtime is all it ever needs.
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()?;

        match self.command {
            SortvizCommands::Run {
                algorithm,
                speed,
                bars,
            } => {
                let mut session = Session::new(bars.bars(), speed);
                session.select(algorithm.sorter());

                println!(
                    "{} Sorting {} bars with {}\n",
                    "==>".green().bold(),
                    session.len().to_string().bold().cyan(),
                    algorithm.to_string().bold().cyan(),
                );

                let mut view = TermView::default();
                view.draw(session.bars());
                runtime.block_on(session.run(&mut view))?;

                println!("\n{} Sorted!", "==>".green().bold());
            }
            SortvizCommands::Shuffle { speed, bars } => {
                let mut session = Session::new(bars.bars(), speed);

                println!(
                    "{} Shuffling {} bars\n",
                    "==>".green().bold(),
                    session.len().to_string().bold().cyan(),
                );

                let mut view = TermView::default();
                view.draw(session.bars());
                runtime.block_on(session.shuffle(&mut view))?;

                println!("\n{} Shuffled!", "==>".green().bold());
            }
        }

        Ok(())
    }
}
