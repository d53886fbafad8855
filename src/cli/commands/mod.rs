use std::collections::HashMap;

use once_cell::sync::Lazy;
use uuid::Uuid;

use crate::config::{Config, ConfigManager};
use crate::core::services::ServiceError;
use crate::errors::TrackerError;
use crate::storage::{JsonStorage, StorageBackend};

pub mod config_handlers;
pub mod subscription_handlers;
pub mod summary_handlers;

/// Everything a command handler needs: the storage backend and the loaded
/// configuration.
pub struct CliContext {
    pub store: JsonStorage,
    pub config_manager: ConfigManager,
    pub config: Config,
}

impl CliContext {
    pub fn new() -> Result<Self, TrackerError> {
        let config_manager = ConfigManager::new();
        let config = config_manager.load()?;
        Ok(Self {
            store: JsonStorage::new(),
            config_manager,
            config,
        })
    }

    /// Resolves a subscription id from a full UUID or a unique prefix.
    pub fn resolve_id(&self, raw: &str) -> Result<Uuid, CommandError> {
        if let Ok(id) = raw.parse::<Uuid>() {
            return Ok(id);
        }
        let subscriptions = self.store.load()?;
        let mut matches = subscriptions
            .iter()
            .filter(|sub| sub.id.to_string().starts_with(raw));
        match (matches.next(), matches.next()) {
            (Some(sub), None) => Ok(sub.id),
            (Some(_), Some(_)) => Err(CommandError::Usage(format!(
                "`{}` matches more than one subscription",
                raw
            ))),
            _ => Err(CommandError::Usage(format!(
                "no subscription matches `{}`",
                raw
            ))),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Tracker(#[from] TrackerError),
}

pub type CommandResult = Result<(), CommandError>;

pub type CommandHandler = fn(&mut CliContext, &[String]) -> CommandResult;

#[derive(Clone)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandDefinition {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandDefinition>,
    order: Vec<&'static str>,
}

impl CommandRegistry {
    pub fn new(definitions: Vec<CommandDefinition>) -> Self {
        let mut commands = HashMap::new();
        let mut order = Vec::new();
        for definition in definitions {
            order.push(definition.name);
            commands.insert(definition.name, definition);
        }
        Self { commands, order }
    }

    pub fn get(&self, name: &str) -> Option<&CommandDefinition> {
        self.commands.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandDefinition> {
        self.order
            .iter()
            .filter_map(move |name| self.commands.get(name))
    }
}

fn all_definitions() -> Vec<CommandDefinition> {
    let mut commands = Vec::new();
    commands.extend(summary_handlers::definitions());
    commands.extend(subscription_handlers::definitions());
    commands.extend(config_handlers::definitions());
    commands
}

pub static REGISTRY: Lazy<CommandRegistry> = Lazy::new(|| CommandRegistry::new(all_definitions()));
