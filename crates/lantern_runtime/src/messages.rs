//! Player-facing text for parse failures and refused actions.

use lantern_parser::{ActionError, Event, Reason};
use lantern_world::World;
use tracing::warn;

/// Canned responses, one per failure.
///
/// `{thing}` in a template is replaced with the thing's description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Messages {
    /// No action matched the words.
    pub syntax: String,
    /// The words matched, but an argument was the wrong kind of thing.
    pub mismatch: String,
    /// An argument vanished before the action ran.
    pub gone: String,
    /// An argument had to be carried.
    pub not_carried: String,
    /// The world refused an update.
    pub internal: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self::english()
    }
}

impl Messages {
    /// The stock English table.
    #[must_use]
    pub fn english() -> Self {
        Self {
            syntax: "I don't understand that.".to_string(),
            mismatch: "You can't do that with that.".to_string(),
            gone: "That isn't here any more.".to_string(),
            not_carried: "You aren't holding the {thing}.".to_string(),
            internal: "Something went wrong.".to_string(),
        }
    }

    /// Text for a parse failure.
    #[must_use]
    pub fn reason(&self, reason: Reason) -> &str {
        match reason {
            Reason::Syntax => &self.syntax,
            Reason::Mismatch => &self.mismatch,
        }
    }

    /// Text for a refused action.
    #[must_use]
    pub fn action_error(&self, error: &ActionError, world: &World) -> String {
        match error {
            ActionError::Gone(_) => self.gone.clone(),
            ActionError::NotCarried(id) => {
                self.not_carried.replace("{thing}", &world.describe(*id))
            }
            ActionError::Precondition(message) => message.clone(),
            ActionError::World(err) => {
                warn!(error = %err, "world rejected an action");
                self.internal.clone()
            }
        }
    }

    /// Text for an event.
    #[must_use]
    pub fn event(&self, event: &Event) -> String {
        event.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lantern_foundation::{EntityId, Error, Kind};
    use lantern_world::ThingData;

    #[test]
    fn reasons_have_distinct_text() {
        let messages = Messages::english();
        assert_eq!(messages.reason(Reason::Syntax), "I don't understand that.");
        assert_ne!(messages.reason(Reason::Syntax), messages.reason(Reason::Mismatch));
    }

    #[test]
    fn not_carried_names_the_thing() {
        let sword = ThingData::new("sword", Kind::Weapon).with_adjective("rusty");
        let (world, sword) = World::new(0).spawn(sword);
        let text = Messages::english().action_error(&ActionError::NotCarried(sword), &world);
        assert_eq!(text, "You aren't holding the rusty sword.");
    }

    #[test]
    fn preconditions_pass_through() {
        let world = World::new(0);
        let messages = Messages::english();
        let text = messages.action_error(&ActionError::precondition("It's locked."), &world);
        assert_eq!(text, "It's locked.");
        let text = messages.action_error(
            &ActionError::World(Error::entity_not_found(EntityId::new(9, 1))),
            &world,
        );
        assert_eq!(text, messages.internal);
    }

    #[test]
    fn notifications_are_parenthesised() {
        let messages = Messages::english();
        let event = Event::Notification("first taking the sword".to_string());
        assert_eq!(messages.event(&event), "(first taking the sword)");
    }
}
