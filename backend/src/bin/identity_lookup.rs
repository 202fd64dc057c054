//! Verify an identity token against the provider and print the resolved profile.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io;
use std::sync::Arc;

use backend::config::IdentityProviderSettings;
use backend::domain::ports::{IdentityResolver, TokenAuthenticator};
use backend::domain::{IdentityInfoService, TokenVerificationService};
use backend::outbound::identity_toolkit::IdentityToolkitClient;
use clap::Parser;
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
use zeroize::Zeroizing;

/// `identity-lookup` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "identity-lookup",
    about = "Verify an identity token and print the resolved identity profile as JSON",
    version
)]
struct CliArgs {
    /// Raw identity token. Falls back to `IDENTITY_TOKEN` when omitted.
    #[arg(long = "token", value_name = "token", env = "IDENTITY_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main())
}

async fn async_main() -> io::Result<()> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let token = args.token.map(Zeroizing::new);

    // Settings come from the environment and config files only; the command
    // line belongs to `CliArgs`.
    let settings = IdentityProviderSettings::load_from_iter([OsString::from("identity-lookup")])
        .map_err(|error| io::Error::other(format!("load identity provider settings: {error}")))?;
    let provider = Arc::new(
        IdentityToolkitClient::from_settings(&settings)
            .map_err(|error| io::Error::other(format!("build identity provider client: {error}")))?,
    );

    let authenticator = TokenVerificationService::new(Arc::clone(&provider));
    let resolver = IdentityInfoService::new(provider);

    let identity = authenticator
        .verify(token.as_ref().map(|raw| raw.as_str()))
        .await
        .map_err(|error| io::Error::other(format!("{}: {error}", error.kind())))?;
    let info = resolver
        .resolve(Some(identity.subject_id()))
        .await
        .map_err(|error| io::Error::other(format!("{}: {error}", error.kind())))?;

    let rendered = serde_json::to_string_pretty(&info)
        .map_err(|error| io::Error::other(format!("render identity profile: {error}")))?;
    println!("{rendered}");

    Ok(())
}
