mod auth;
mod error;

use anyhow::Result;
use chrono::Utc;
use clap::error::ErrorKind;
use clap::Parser;
use error::TokenError;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "apple-secret-gen",
    version,
    about = "Generate a Sign in with Apple client secret (ES256 JWT)",
    after_help = "Example:\n  apple-secret-gen ./AuthKey_ABC123.p8 D5573X74YC ABC123 com.example.app.service"
)]
struct Cli {
    /// Path to the .p8 private key downloaded from the Apple developer portal.
    key_file: PathBuf,

    /// Apple Developer Team ID (the token issuer).
    issuer: String,

    /// ID of the .p8 signing key, as shown in the developer portal.
    key_id: String,

    /// Service ID the secret is issued for (e.g. com.example.app.service).
    subject: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "apple_secret_gen=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Usage errors exit 1 like every other failure, not clap's default 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            std::process::exit(code);
        }
    };

    let pem = std::fs::read_to_string(&cli.key_file)
        .map_err(|e| TokenError::KeyRead(format!("{}: {e}", cli.key_file.display())))?;
    info!(key_file = %cli.key_file.display(), "loaded signing key");

    let token = auth::generate_token(&pem, &cli.issuer, &cli.key_id, &cli.subject)?;

    // Only the token goes to stdout; the framing stays on stderr so the
    // output can be piped straight into an OAuth configuration field.
    let expires = Utc::now() + chrono::Duration::seconds(auth::SECRET_TTL_SECS as i64);
    eprintln!();
    eprintln!("Client secret generated. Paste it into the OAuth provider's");
    eprintln!("\"Secret Key (for OAuth)\" field:");
    eprintln!();
    println!("{token}");
    eprintln!();
    eprintln!(
        "The secret expires around {}. Generate a new one before then.",
        expires.format("%Y-%m-%d")
    );

    Ok(())
}
