use std::{
    error::Error,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::{Parser, Subcommand};
use designsystem::{
    tokens::BorderStyle, Category, ExportFormat, Exporter, MutationPolicy, TokenEdit, TokenSet,
};
use platform::{
    bootstrap, ConfigStore, ExportArtifact, ExportSink, FileSink, PluginConfig, TokenStateStore,
    WriterSink,
};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();
    if let Err(err) = Cli::parse().run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[derive(Debug, Parser)]
#[command(
    name = "tokens",
    about = "Edit and export design system tokens",
    version
)]
struct Cli {
    /// Token state file. Defaults to the platform data directory.
    #[arg(long, global = true)]
    state: Option<PathBuf>,
    /// Configuration file. Defaults to the platform config directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Report invalid edits as errors instead of ignoring them.
    #[arg(long, global = true)]
    strict: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List tokens of one category, or of every category.
    List { category: Option<Category> },
    /// Add a token with category defaults.
    Add {
        category: Category,
        /// Token name; generated from the token count when omitted.
        name: Option<String>,
    },
    /// Rename a token in place.
    Rename {
        category: Category,
        from: String,
        to: String,
    },
    /// Delete a token after confirmation.
    Delete {
        category: Category,
        name: String,
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
    /// Copy a token under a new name.
    Duplicate {
        category: Category,
        name: String,
        new_name: String,
    },
    /// Include or exclude a color from exports.
    Toggle { name: String },
    /// Set one field of a token, e.g. `set typography body weight 500`.
    Set {
        category: Category,
        name: String,
        field: String,
        value: String,
    },
    /// Export the design system as JSON.
    Export {
        /// Emit minified JSON regardless of configuration.
        #[arg(long, conflicts_with = "pretty")]
        minify: bool,
        /// Emit indented JSON regardless of configuration.
        #[arg(long)]
        pretty: bool,
        /// Print to stdout instead of writing design-system.json.
        #[arg(long)]
        stdout: bool,
        /// Output directory. Defaults to the configured export directory.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Export the design system as CSS custom properties.
    Css {
        /// Print to stdout instead of writing design-system.css.
        #[arg(long)]
        stdout: bool,
        /// Output directory. Defaults to the configured export directory.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Restore the built-in tokens.
    Reset,
}

impl Cli {
    fn run(self) -> Result<(), Box<dyn Error>> {
        let config_store = self.config.map(ConfigStore::new).unwrap_or_default();
        let state_store = self.state.map(TokenStateStore::new).unwrap_or_default();
        if matches!(self.command, Command::Reset) {
            state_store.clear()?;
        }
        let (config, mut store) = bootstrap(&config_store, &state_store)?;
        tracing::debug!(state = %state_store.path().display(), ?config, "loaded token state");
        if self.strict {
            store = store.with_policy(MutationPolicy::Strict);
        }

        let applied = match self.command {
            Command::List { category } => {
                list(store.tokens(), category);
                return Ok(());
            }
            Command::Export {
                minify,
                pretty,
                stdout,
                out,
            } => {
                let format = if minify {
                    ExportFormat::Minified
                } else if pretty {
                    ExportFormat::Pretty
                } else {
                    config.export_format
                };
                let artifact = ExportArtifact::json(&Exporter::new(), store.tokens(), format)?;
                return deliver(&artifact, &config, stdout, out);
            }
            Command::Css { stdout, out } => {
                let artifact = ExportArtifact::css(&Exporter::new(), store.tokens());
                return deliver(&artifact, &config, stdout, out);
            }
            Command::Add { category, name } => match store.add(category, name.as_deref())? {
                Some(name) => {
                    println!("added {category} '{name}'");
                    true
                }
                None => false,
            },
            Command::Rename { category, from, to } => store.rename(category, &from, &to)?,
            Command::Delete {
                category,
                name,
                yes,
            } => store.delete_confirmed(category, &name, |category, key| {
                yes || confirm(&format!("Delete {category} '{key}'?"))
            })?,
            Command::Duplicate {
                category,
                name,
                new_name,
            } => store.duplicate(category, &name, &new_name)?,
            Command::Toggle { name } => store.toggle_enabled(&name)?,
            Command::Set {
                category,
                name,
                field,
                value,
            } => store.update(&name, TokenEdit::parse(category, &field, &value)?)?,
            Command::Reset => {
                store.reset();
                true
            }
        };

        if applied {
            state_store.save(&store)?;
        } else {
            println!("no change");
        }
        Ok(())
    }
}

fn deliver(
    artifact: &ExportArtifact,
    config: &PluginConfig,
    stdout: bool,
    out: Option<PathBuf>,
) -> Result<(), Box<dyn Error>> {
    if stdout {
        WriterSink::new(io::stdout().lock()).deliver(artifact)?;
    } else {
        let mut sink = FileSink::new(out.unwrap_or_else(|| config.export_dir()));
        sink.deliver(artifact)?;
        println!("wrote {}", sink.target(artifact).display());
    }
    Ok(())
}

fn confirm(prompt: &str) -> bool {
    print!("{prompt} [y/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim(), "y" | "Y" | "yes")
}

fn list(tokens: &TokenSet, category: Option<Category>) {
    let categories = category.map_or_else(|| Category::ALL.to_vec(), |category| vec![category]);
    for category in categories {
        print_section(category.as_str(), &describe(tokens, category));
    }
    if category.is_none() {
        print_section("border-styles", &describe_border_styles(tokens));
        print_section("components", &describe_components(tokens));
    }
}

fn print_section(title: &str, lines: &[String]) {
    println!("{title}:");
    for line in lines {
        println!("  {line}");
    }
}

fn describe_border_styles(tokens: &TokenSet) -> Vec<String> {
    vec![tokens
        .border_styles
        .iter()
        .map(|style| BorderStyle::as_str(*style))
        .collect::<Vec<_>>()
        .join(" ")]
}

fn describe_components(tokens: &TokenSet) -> Vec<String> {
    tokens
        .components
        .iter()
        .map(|(key, component)| {
            let sizes = component
                .variants
                .values()
                .map(|variant| variant.sizes.len())
                .max()
                .unwrap_or_default();
            format!(
                "{key:<16} {} variants x {sizes} sizes",
                component.variants.len()
            )
        })
        .collect()
}

fn describe(tokens: &TokenSet, category: Category) -> Vec<String> {
    match category {
        Category::Colors => tokens
            .colors
            .iter()
            .map(|(key, color)| {
                let state = if color.enabled { "" } else { " (disabled)" };
                format!("{key:<16} {}{state}", color.value)
            })
            .collect(),
        Category::Spacing => scalar_lines(tokens.spacing.iter().map(|(key, token)| (key, token.value))),
        Category::Radius => scalar_lines(tokens.radius.iter().map(|(key, token)| (key, token.value))),
        Category::BorderWidths => {
            scalar_lines(tokens.border_widths.iter().map(|(key, token)| (key, token.value)))
        }
        Category::Typography => tokens
            .typography
            .iter()
            .map(|(key, style)| {
                format!(
                    "{key:<16} {} {}px/{} lh {} ls {} {}",
                    style.family,
                    style.size,
                    style.weight,
                    style.line_height,
                    style.letter_spacing,
                    style.transform.as_str()
                )
            })
            .collect(),
        Category::Shadows => tokens
            .shadows
            .iter()
            .map(|(key, shadow)| format!("{key:<16} {}", shadow.css()))
            .collect(),
        Category::Themes => tokens
            .themes
            .iter()
            .map(|(key, theme)| {
                format!(
                    "{key:<16} {} ({} color overrides)",
                    theme.name,
                    theme.colors.len()
                )
            })
            .collect(),
    }
}

fn scalar_lines<'a>(entries: impl Iterator<Item = (&'a str, u32)>) -> Vec<String> {
    entries
        .map(|(key, value)| format!("{key:<16} {value}px"))
        .collect()
}
