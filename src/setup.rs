use crate::util::ContextExtras;
use crate::{AppError, AppVars, Context, gas::GasClient, matches, meta, teams, users};
use anyhow::{Context as _, anyhow};
use clap::ArgMatches;
use itertools::Itertools;
use pluralizer::pluralize;
use poise::{
    BoxFuture, Command, Framework, FrameworkError, FrameworkOptions, PrefixFrameworkOptions,
};
use serenity::FutureExt;
use serenity::all::{ChannelId, GuildId};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub(crate) fn load_env(args: &ArgMatches) {
    if let Some(path) = args.get_one::<PathBuf>("config") {
        dotenv::from_filename(path).ok();
    }
}

pub(crate) fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ladder_bot=info,serenity=warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

// Env Setup
#[derive(Clone, Debug)]
pub(crate) struct CommandVars {
    pub(crate) prefix: String,
    pub(crate) register_globally: bool,
    pub(crate) guilds: Vec<GuildId>,
    pub(crate) allowed_channels: Vec<ChannelId>,
}

#[derive(Clone, Debug)]
pub(crate) struct Vars {
    pub(crate) token: String,
    pub(crate) gas_url: String,
    pub(crate) commands: CommandVars,
}

fn parse_ids(key: &str, text: &str) -> anyhow::Result<Vec<u64>> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|id| {
            id.parse::<u64>()
                .ok()
                .filter(|id| *id != 0)
                .ok_or_else(|| anyhow!("{key}: `{id}` is not a valid snowflake"))
        })
        .collect()
}

impl Vars {
    pub(crate) fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let required = |key: &str| {
            get(key)
                .filter(|v| !v.trim().is_empty())
                .with_context(|| format!("${key} must be set"))
        };
        let optional = |key: &str| get(key).unwrap_or_default();

        let prefix = match optional("BOT_COMMAND_PREFIX").trim() {
            "" => String::from("!"),
            prefix => prefix.to_owned(),
        };

        Ok(Self {
            token: required("DISCORD_BOT_TOKEN")?,
            gas_url: required("GAS_URL")?,
            commands: CommandVars {
                prefix,
                register_globally: !optional("BOT_REGISTER_GLOBALLY").trim().is_empty(),
                guilds: parse_ids("BOT_COMMAND_GUILDS", &optional("BOT_COMMAND_GUILDS"))?
                    .into_iter()
                    .map(GuildId::new)
                    .collect_vec(),
                allowed_channels: parse_ids(
                    "BOT_ALLOWED_CHANNELS",
                    &optional("BOT_ALLOWED_CHANNELS"),
                )?
                .into_iter()
                .map(ChannelId::new)
                .collect_vec(),
            },
        })
    }
}

pub(crate) struct HttpVars {
    pub(crate) gas: GasClient,
}

impl HttpVars {
    pub(crate) fn new(env: &Vars) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("build http client")?;

        Ok(Self {
            gas: GasClient::new(client, env.gas_url.clone()),
        })
    }
}

// Bot setup

pub(crate) async fn register_commands(
    data: &AppVars,
    ctx: &serenity::all::Context,
    framework: &Framework<AppVars, AppError>,
) -> Result<(), AppError> {
    let is_global = data.env.commands.register_globally;
    let no_commands = &[] as &[Command<AppVars, AppError>];
    let commands = &framework.options().commands;
    let global_registration = if is_global { commands } else { no_commands };
    let local_registration = if is_global { no_commands } else { commands };
    let guilds = &data.env.commands.guilds;

    poise::builtins::register_globally(ctx, global_registration).await?;

    for id in guilds.iter() {
        poise::builtins::register_in_guild(ctx, local_registration, *id).await?;
    }

    let commands_text = pluralize("command", commands.len() as isize, true);
    if is_global {
        info!("registered {commands_text} globally");
    } else {
        let guilds_text = pluralize("guild", guilds.len() as isize, true);
        info!("registered {commands_text} locally in {guilds_text}");
    }

    Ok(())
}

fn handle_framework_error(error: FrameworkError<'_, AppVars, AppError>) -> BoxFuture<'_, ()> {
    async move {
        error!("framework error: {error}");

        let Some(ctx) = error.ctx() else { return };
        let error_res = match error {
            FrameworkError::Command {
                error: wrapped_error,
                ..
            } => {
                ctx.reply_ephemeral(format!("🚨 알 수 없는 오류가 발생했습니다: {wrapped_error:?}"))
                    .await
            }
            FrameworkError::CommandCheckFailed { .. } => {
                ctx.reply_ephemeral("🚫 이 채널에서는 명령어를 사용할 수 없습니다.")
                    .await
            }
            _ => ctx.reply_ephemeral("🚨 알 수 없는 오류가 발생했습니다.").await,
        };
        if let Err(e) = error_res {
            error!("a further error occurred sending the error message to discord: {e:?}")
        }
    }
    .boxed()
}

fn channel_allowed(allowed: &[ChannelId], channel: ChannelId) -> bool {
    allowed.is_empty() || allowed.contains(&channel)
}

fn check_command_invocation(ctx: Context<'_>) -> BoxFuture<'_, Result<bool, AppError>> {
    async move {
        Ok(channel_allowed(
            &ctx.data().env.commands.allowed_channels,
            ctx.channel_id(),
        ))
    }
    .boxed()
}

fn get_bot_commands() -> Vec<Command<AppVars, AppError>> {
    vec![
        users::register::register(),
        users::alias::register_alias(),
        users::delete::delete_user(),
        users::lookup::lookup_user(),
        users::class::register_class(),
        matches::record::record_result(),
        matches::lookup::lookup_result(),
        matches::delete::delete_result(),
        teams::generate::generate_teams(),
        meta::help::help(),
        meta::ping::ping(),
    ]
}

pub(crate) fn create_bot_framework_options(env: &Vars) -> FrameworkOptions<AppVars, AppError> {
    FrameworkOptions {
        on_error: handle_framework_error,
        commands: get_bot_commands(),
        command_check: Some(check_command_invocation),
        prefix_options: PrefixFrameworkOptions {
            prefix: Some(env.commands.prefix.clone()),
            ..Default::default()
        },
        ..Default::default()
    }
}
