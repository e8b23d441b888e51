//! Telegram command surface.

use crate::core::models::{GroupInfo, InboundMessage, Sender};
use crate::core::traits::ChatService;
use crate::error::Result;
use log::info;
use teloxide::types::Message;
use teloxide::utils::command::{BotCommands, ParseError};

pub mod handlers;

pub const START_TEXT: &str = "Hi! I am a Telegram Bot for data analysis and group management.";

pub const HELP_TEXT: &str = "Available commands:
/start - Start the bot
/help - Show this help message
/stats - Show statistics
/join_group <group_link> - Join a group
/leave_group - Leave the current group
/analyze_interests - Analyze interests based on messages";

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "snake_case", description = "Available commands:")]
pub enum Command {
    #[command(description = "Start the bot")]
    Start,
    #[command(description = "Show this help message")]
    Help,
    #[command(description = "Show statistics")]
    Stats,
    #[command(description = "Join a group", parse_with = first_argument)]
    JoinGroup(Option<String>),
    #[command(description = "Leave the current group")]
    LeaveGroup,
    #[command(description = "Analyze interests based on messages")]
    AnalyzeInterests,
}

fn first_argument(input: String) -> Result<(Option<String>,), ParseError> {
    Ok((input.split_whitespace().next().map(str::to_owned),))
}

/// The group a message was sent in, `None` for direct chats.
pub fn group_of(msg: &Message) -> Option<GroupInfo> {
    if msg.chat.is_group() || msg.chat.is_supergroup() {
        Some(GroupInfo {
            id: msg.chat.id.0,
            title: msg.chat.title().unwrap_or_default().to_owned(),
        })
    } else {
        None
    }
}

/// Extracts the parts of a message that get recorded.
///
/// Only plain text from a known sender is recorded. Returns `None` for commands,
/// service messages (members joining, pins, title changes), media and channel posts.
pub fn inbound_from(msg: &Message) -> Option<InboundMessage> {
    let text = msg.text().filter(|t| !t.starts_with('/'))?;
    let user = msg.from.as_ref()?;

    Some(InboundMessage {
        sender: Sender {
            id: user.id.0 as i64,
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        },
        group: group_of(msg),
        chat_id: msg.chat.id.0,
        message_id: i64::from(msg.id.0),
        text: Some(text.to_owned()),
    })
}

/// Builds the reply text for a command.
///
/// Wrong usage is answered with a hint, only storage failures are errors.
pub async fn respond(
    cmd: Command,
    group: Option<&GroupInfo>,
    service: &dyn ChatService,
) -> Result<String> {
    let reply = match cmd {
        Command::Start => START_TEXT.to_owned(),
        Command::Help => HELP_TEXT.to_owned(),
        Command::Stats => service.compute_statistics().await?.to_reply(),
        Command::JoinGroup(None) => "Please provide a group link or username.".to_owned(),
        Command::JoinGroup(Some(link)) => {
            // Joining needs extra API permissions, only acknowledged for now.
            info!("join requested for {link}");
            format!("Attempting to join group: {link}")
        }
        Command::LeaveGroup => match group {
            Some(group) => {
                info!("leave requested for group {}", group.id);
                format!("Leaving group: {}", group.title)
            }
            None => "This command can only be used in groups.".to_owned(),
        },
        Command::AnalyzeInterests => service.compute_interests().await?.to_reply(),
    };
    Ok(reply)
}
