//! The optional effort word at the end of a command.

use crate::argument::{ArgumentParser, EnumParser, ParseContext};
use crate::cursor::WordCursor;
use crate::value::{Effort, ParamType, Value, WordEnum};

/// Reads the trailing effort modifier ("carefully", "quickly").
#[derive(Clone, Debug)]
pub struct EffortParser {
    words: EnumParser,
}

impl Default for EffortParser {
    fn default() -> Self {
        Self {
            words: EnumParser::of::<Effort>(),
        }
    }
}

impl EffortParser {
    /// Reads an effort word at the cursor.
    pub fn parse_effort(
        &self,
        cursor: &mut WordCursor,
        ctx: &ParseContext<'_>,
    ) -> Option<Effort> {
        self.words
            .parse_constant(cursor, ctx)
            .and_then(Effort::from_constant)
    }
}

impl ArgumentParser for EffortParser {
    fn produces(&self) -> ParamType {
        ParamType::Effort
    }

    fn parse(&self, cursor: &mut WordCursor, ctx: &ParseContext<'_>) -> Option<Value> {
        self.parse_effort(cursor, ctx).map(Value::Effort)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::Vocabulary;
    use lantern_foundation::EntityId;
    use lantern_world::World;

    #[test]
    fn reads_effort_words() {
        let vocab = Vocabulary::new()
            .with_synonyms("effort.careful", ["carefully", "gently"])
            .with_synonyms("effort.forceful", ["hard", "forcefully"]);
        let world = World::new(0);
        let ctx = ParseContext::new(&world, EntityId::new(0, 1), &vocab);
        let parser = EffortParser::default();

        let mut cursor = WordCursor::new(vec!["gently".into()]);
        assert_eq!(parser.parse_effort(&mut cursor, &ctx), Some(Effort::Careful));

        let mut cursor = WordCursor::new(vec!["loudly-ish".into()]);
        assert_eq!(parser.parse(&mut cursor, &ctx), None);
        assert_eq!(cursor.position(), 0);
    }
}
