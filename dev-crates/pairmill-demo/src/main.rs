use std::num::NonZeroUsize;

use clap::Parser;
use pairmill::batching::{BatchBuilderOptions, DEFAULT_BATCH_SIZE, DEFAULT_NUM_EPOCHS};
use pairmill::corpus::{corpus_pairs, prepare_pairs};
use pairmill::filters::{FilterChain, FilterConfig};
use pairmill::modifiers::{ModifierChain, ModifierConfig};
use pairmill::rayon::{ParallelRayonFilter, ParallelRayonModifier};
use pairmill::tokenizer::Tokenizer;
use stderrlog::Timestamp;

/// A tiny built-in corpus, standing in for a real transcript dataset.
const CONVERSATIONS: &[&[&str]] = &[
    &[
        "Can we make this quick?",
        "Sure, what's up?",
        "I lost my notes from yesterday.",
        "Again? Check the kitchen table.",
        "You're a lifesaver!",
    ],
    &[
        "Did you see the game last night?",
        "No, I fell asleep early.",
        "You missed a great finish.",
    ],
    &[
        "Where are we meeting tomorrow?",
        "The usual place, at noon.",
        "Perfect, see you there.",
    ],
    &["This one never gets a reply."],
];

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
struct LogArgs {
    /// Silence log messages.
    #[clap(short, long)]
    quiet: bool,

    /// Turn debugging information on (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, default_value = None)]
    verbose: Option<u8>,

    /// Enable timestamped logging.
    #[clap(short, long)]
    ts: bool,
}

impl LogArgs {
    fn setup_logging(
        &self,
        default: u8,
    ) -> Result<(), log::SetLoggerError> {
        let level = if let Some(verbose) = self.verbose
            && verbose > 0
        {
            verbose
        } else {
            default
        };

        let log_level = match level {
            0 => stderrlog::LogLevelNum::Off,
            1 => stderrlog::LogLevelNum::Error,
            2 => stderrlog::LogLevelNum::Warn,
            3 => stderrlog::LogLevelNum::Info,
            4 => stderrlog::LogLevelNum::Debug,
            _ => stderrlog::LogLevelNum::Trace,
        };

        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(log_level)
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()
    }
}

/// Example dialogue batching driver.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Batch size.
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: NonZeroUsize,

    /// Number of epochs to draw.
    #[arg(long, default_value_t = DEFAULT_NUM_EPOCHS)]
    num_epochs: usize,

    /// Maximum sequence length kept by the filter, in characters.
    #[arg(long, default_value_t = 120)]
    max_length: usize,

    /// Optional RNG seed for a reproducible draw order.
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    args.log.setup_logging(3)?;
    log::debug!("{args:#?}");

    let modifiers = ParallelRayonModifier::new(ModifierChain::from_configs(&[
        ModifierConfig::LowercaseTrim,
        ModifierConfig::SeparateChars {
            chars: ".!?'".to_string(),
        },
        ModifierConfig::KeepChars {
            chars: "a-zA-Z.?!'".to_string(),
        },
    ])?);
    let filters = ParallelRayonFilter::new(FilterChain::from_configs(&[
        FilterConfig::MaxLength {
            max_length: args.max_length,
        },
    ]));

    let candidates = corpus_pairs(CONVERSATIONS);
    let pairs = prepare_pairs(candidates.clone(), &modifiers, &filters);

    println!("Corpus Summary:");
    println!("- conversations: {}", CONVERSATIONS.len());
    println!("- candidate pairs: {}", candidates.len());
    println!("- training pairs: {}", pairs.len());

    let mut tokenizer: Tokenizer<u32> = Tokenizer::new();
    let records = tokenizer.tokenize_pairs(&pairs)?;

    println!();
    println!("Vocabulary Summary:");
    println!("- tokens: {}", tokenizer.vocabulary().len());

    let mut options = BatchBuilderOptions::new().with_num_epochs(args.num_epochs);
    if let Some(seed) = args.seed {
        options = options.with_seed(seed);
    }
    let mut builder = options.init(records);

    println!();
    println!("Drawing Batches:");
    let mut batch_index = 0;
    loop {
        let batch = builder.get_batch(args.batch_size);
        if batch.is_empty() {
            break;
        }
        batch_index += 1;
        println!(
            "- batch {}: examples {} input steps {} output steps {}",
            batch_index,
            batch.len(),
            batch.inputs.max_len(),
            batch.outputs.max_len(),
        );
    }
    println!("- epochs drawn: {}", builder.current_epoch());

    Ok(())
}
