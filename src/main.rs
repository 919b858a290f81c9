mod gas;
mod handler;
mod matches;
mod meta;
mod setup;
mod teams;
mod users;
mod util;

use crate::setup::{HttpVars, Vars};
use anyhow::Context as _;
use clap::{Arg, Command, value_parser};
use serenity::Client;
use serenity::all::GatewayIntents;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

pub(crate) struct AppVarsInner {
    pub(crate) env: Vars,
    pub(crate) http: HttpVars,
}

type AppVars = Arc<AppVarsInner>;
type AppError = anyhow::Error;
type Context<'a> = poise::Context<'a, AppVars, AppError>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Command::new("ladder-bot")
        .about("Discord front-end for the ladder spreadsheet")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("dotenv file to load before reading the environment")
                .value_parser(value_parser!(PathBuf))
                .default_value(".env"),
        )
        .get_matches();

    setup::load_env(&args);
    setup::init_tracing();

    let env = Vars::from_env().context("read configuration")?;
    let data: AppVars = Arc::new(AppVarsInner {
        http: HttpVars::new(&env)?,
        env,
    });

    let framework_data = data.clone();
    let framework = poise::Framework::<AppVars, AppError>::builder()
        .options(setup::create_bot_framework_options(&data.env))
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                setup::register_commands(&framework_data, ctx, framework).await?;
                Ok(framework_data)
            })
        })
        .build();

    let intents = GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT;
    let mut client = Client::builder(&data.env.token, intents)
        .event_handler(handler::LadderEventHandler)
        .framework(framework)
        .await
        .context("couldn't make client")?;

    info!(prefix = %data.env.commands.prefix, "starting gateway connection");
    client.start().await.context("client error")?;

    Ok(())
}
