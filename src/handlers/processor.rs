use crate::handlers::events::{Command, StateKind};
use crate::models::coordinate::Coordinate;

/// Turns raw prompt answers into commands for the collector actor.
pub trait UpdateProcessor {
    fn process_latitude(&mut self, input: String) -> Vec<Command>;
    fn process_pair(&mut self, latitude: String, longitude: String) -> Vec<Command>;
}

pub struct CoordinateProcessor {
    sentinel: String,
}

impl CoordinateProcessor {
    pub fn new(sentinel: &str) -> Self {
        Self { sentinel: sentinel.to_lowercase() }
    }
}

impl UpdateProcessor for CoordinateProcessor {
    fn process_latitude(&mut self, input: String) -> Vec<Command> {
        // Only the latitude answer can carry the sentinel.
        if input.to_lowercase() == self.sentinel {
            vec![Command::Transition(StateKind::Terminated)]
        } else {
            vec![Command::RequestLongitude(input)]
        }
    }

    fn process_pair(&mut self, latitude: String, longitude: String) -> Vec<Command> {
        match Coordinate::parse(&latitude, &longitude) {
            Ok(coordinate) => vec![Command::Append(coordinate), Command::PrintLog],
            Err(e) => vec![Command::InputError(e)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::error::Field;

    fn processor() -> CoordinateProcessor {
        CoordinateProcessor::new("exit")
    }

    #[test]
    fn sentinel_matches_any_case() {
        for input in ["exit", "EXIT", "ExIt"] {
            let commands = processor().process_latitude(input.to_string());
            assert!(matches!(
                commands.as_slice(),
                [Command::Transition(StateKind::Terminated)]
            ));
        }
    }

    #[test]
    fn padded_sentinel_is_not_the_sentinel() {
        let commands = processor().process_latitude(" exit".to_string());
        assert!(matches!(
            commands.as_slice(),
            [Command::RequestLongitude(lat)] if lat == " exit"
        ));
    }

    #[test]
    fn valid_pair_appends_then_prints() {
        let commands = processor().process_pair("1.5".to_string(), "-2".to_string());
        match commands.as_slice() {
            [Command::Append(c), Command::PrintLog] => {
                assert_eq!(*c, Coordinate::new(1.5, -2.0));
            }
            _ => panic!("unexpected commands"),
        }
    }

    #[test]
    fn invalid_pair_yields_only_an_error() {
        let commands = processor().process_pair("1.5".to_string(), "west".to_string());
        match commands.as_slice() {
            [Command::InputError(e)] => assert_eq!(e.field, Field::Longitude),
            _ => panic!("unexpected commands"),
        }
    }
}
