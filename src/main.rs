use aion_mind::config::settings::DEFAULT_CONFIG_PATH;
use aion_mind::{logger, AgentCore, Result, Settings};
use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(name = "aion-mind")]
#[command(about = "AION-MIND agent core, answers prompts with a canned stub response")]
struct Cli {
    /// Free-text prompt; all arguments are joined with single spaces
    #[arg(value_name = "PROMPT", trailing_var_arg = true, allow_hyphen_values = true)]
    prompt: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::load(DEFAULT_CONFIG_PATH)?;

    // Initialize logging
    logger::init(&settings.logging)?;

    info!("Starting aion-mind v{}", env!("CARGO_PKG_VERSION"));

    print_banner();

    if cli.prompt.is_empty() {
        print_usage();
        return Ok(());
    }

    let prompt = cli.prompt.join(" ");
    info!("Processing prompt ({} chars)", prompt.chars().count());

    let agent = AgentCore::new()?;
    let result = agent.think(&prompt);
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

fn print_banner() {
    println!("🤖 AION-MIND Agent Core");
    println!("{}", "=".repeat(50));
}

fn print_usage() {
    println!("⚠️  AION-MIND en modo stub");
    println!("Uso: aion-mind 'tu prompt aquí'");
    println!();
    println!("Integraciones disponibles:");
    println!("- Emergent LLM Key (OpenAI/Anthropic/Gemini)");
    println!("- Modelos locales (llama.cpp)");
}
