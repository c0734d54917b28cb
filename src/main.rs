use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tagwin::features::accuracy;
use tagwin::input::{self, conll, conll::ColumnLayout};
use tagwin::{
    Config, ContextExtractor, DictVectorizer, ExtractorConfig, Perceptron, Tagger, Tokenizer,
    Translation,
};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "tagwin")]
#[command(version)]
#[command(about = "Tokenizers and a context-window POS tagger", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level: error, warn, info, debug or trace
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the tokens of a document, one per line
    Tokenize {
        /// Text, PDF or EPUB file (stdin when absent)
        file: Option<String>,

        /// split, find or punct
        #[arg(short, long, default_value = "punct")]
        policy: String,
    },

    /// Translate characters, like tr/abc/ABC/
    Translate {
        /// Text file (stdin when absent)
        file: Option<String>,

        /// Source alphabet (default: Swedish lowercase letters)
        #[arg(long, requires = "to")]
        from: Option<String>,

        /// Target alphabet
        #[arg(long, requires = "from")]
        to: Option<String>,
    },

    /// Train a tagger, tag a test corpus and report accuracy
    Tag {
        /// Training corpus
        #[arg(long)]
        train: String,

        /// Test corpus
        #[arg(long)]
        test: String,

        #[arg(long, value_enum, default_value_t = Layout::Conll2009)]
        layout: Layout,

        /// Half-window size
        #[arg(short, long)]
        width: Option<usize>,

        /// Perceptron passes over the training set
        #[arg(short, long)]
        epochs: Option<usize>,

        /// Also window the gold tags during training
        #[arg(long)]
        tag_window: bool,

        /// Lowercase words before extracting features
        #[arg(long)]
        lowercase: bool,

        /// Write the tagged test corpus here
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Layout {
    /// Universal Dependencies, tags in `upos`
    Conllu,
    /// CoNLL 2009, tags in `pos`
    Conll2009,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.log_level.as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Tokenize { file, policy } => {
            let mut config = Config::default();
            config.tokenizer.policy = policy.parse()?;
            run_tokenize(file.as_deref(), &config)
        }
        Commands::Translate { file, from, to } => {
            run_translate(file.as_deref(), from.as_deref(), to.as_deref())
        }
        Commands::Tag {
            train,
            test,
            layout,
            width,
            epochs,
            tag_window,
            lowercase,
            output,
        } => {
            let mut config = Config::default();
            config.extractor = match layout {
                Layout::Conllu => ExtractorConfig::universal_dependencies(),
                Layout::Conll2009 => ExtractorConfig::default(),
            }
            .with_window_tags(tag_window)
            .with_lowercase(lowercase);
            if let Some(width) = width {
                config.extractor.width = width;
            }
            if let Some(epochs) = epochs {
                config.perceptron.epochs = epochs;
            }
            run_tag(&train, &test, layout, config, output.as_deref())
        }
    }
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("reading stdin")?;
    Ok(text)
}

fn run_tokenize(file: Option<&str>, config: &Config) -> Result<()> {
    let tokenizer = Tokenizer::from_config(&config.tokenizer);

    let text = match file {
        Some(path) => {
            let doc = input::load_allow_empty(path)?;
            info!(source = %doc.source, "document loaded");
            doc.text
        }
        None => read_stdin()?,
    };

    let tokens = tokenizer.tokenize(&text);
    info!(tokens = tokens.len(), policy = %tokenizer.policy(), "text tokenized");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for token in tokens {
        writeln!(out, "{token}")?;
    }
    Ok(())
}

fn run_translate(file: Option<&str>, from: Option<&str>, to: Option<&str>) -> Result<()> {
    let translation = match (from, to) {
        (Some(from), Some(to)) => Translation::new(from, to)?,
        _ => Translation::swedish_uppercase(),
    };

    let text = match file {
        Some(path) => input::text::load(path)?.text,
        None => read_stdin()?,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in text.lines() {
        writeln!(out, "{}", translation.translate(line))?;
    }
    Ok(())
}

fn run_tag(
    train_path: &str,
    test_path: &str,
    layout: Layout,
    config: Config,
    output: Option<&str>,
) -> Result<()> {
    let columns = match layout {
        Layout::Conllu => ColumnLayout::conllu(),
        Layout::Conll2009 => ColumnLayout::conll2009_pos(),
    };

    let train = conll::load(train_path, &columns)
        .with_context(|| format!("loading training corpus {train_path}"))?;
    let mut test = conll::load(test_path, &columns)
        .with_context(|| format!("loading test corpus {test_path}"))?;
    info!(
        train_sentences = train.len(),
        test_sentences = test.len(),
        "corpora loaded"
    );

    let extractor = ContextExtractor::new(config.extractor.clone())?;
    let mut tagger = Tagger::new(
        extractor,
        DictVectorizer::new(),
        Perceptron::new(config.perceptron.clone()),
    );
    tagger.fit(&train)?;
    tagger.tag_corpus(&mut test)?;

    let (good, bad) = tagger.evaluate(&test)?;
    match accuracy(good, bad) {
        Some(acc) => println!("Accuracy: {acc:.4} ({good}/{})", good + bad),
        None => println!("Accuracy: no tokens"),
    }

    if let Some(path) = output {
        let extractor = &config.extractor;
        conll::save(
            path,
            &test,
            &[
                extractor.input_column.as_str(),
                extractor.output_column.as_str(),
                extractor.predicted_column.as_str(),
            ],
        )?;
        info!(path, "tagged corpus written");
    }
    Ok(())
}
