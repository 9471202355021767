//! Descriptor validation and final command assembly.
//!
//! Cross-checks the captured positional values and raw options against the
//! executing descriptor's declared shape, classifies each option key by its
//! prefix, and binds everything into the final [`Command`].

use std::sync::Arc;

use command_router_core::{
    Arguments, Command, CommandDescriptor, OptionValue, Options, ParseError, ParserConfig,
    ResolvedArgument, ResolvedOption, Result,
};

use crate::options::RawOption;

/// How an option key was classified from its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyPrefix {
    /// Matched the option prefix; the bare text must be an id.
    Id,
    /// Matched the alias prefix; the bare text must be an alias.
    Alias,
}

/// Binds captured arguments and options to the executing descriptor.
pub(crate) fn bind(
    descriptor: Arc<CommandDescriptor>,
    positional: Vec<String>,
    raw_options: Vec<RawOption>,
    config: &ParserConfig,
) -> Result<Command> {
    let arguments = bind_arguments(&descriptor, positional)?;
    let options = bind_options(&descriptor, raw_options, config)?;
    Ok(Command {
        descriptor,
        arguments,
        options,
    })
}

fn bind_arguments(
    descriptor: &CommandDescriptor,
    positional: Vec<String>,
) -> Result<Option<Arguments>> {
    if positional.is_empty() {
        return Ok(None);
    }
    if descriptor.arguments.is_empty() {
        return Err(ParseError::UnsupportedArguments {
            id: descriptor.id.clone(),
        });
    }
    if positional.len() > descriptor.arguments.len() {
        return Err(ParseError::TooManyArguments {
            id: descriptor.id.clone(),
            declared: descriptor.arguments.len(),
            parsed: positional.len(),
        });
    }

    let bound = positional
        .into_iter()
        .zip(&descriptor.arguments)
        .map(|(value, argument)| ResolvedArgument {
            id: argument.id.clone(),
            value,
        })
        .collect();
    Ok(Some(Arguments::new(bound)))
}

fn bind_options(
    descriptor: &CommandDescriptor,
    raw_options: Vec<RawOption>,
    config: &ParserConfig,
) -> Result<Option<Options>> {
    if raw_options.is_empty() {
        return Ok(None);
    }
    if descriptor.options.is_empty() {
        return Err(ParseError::UnsupportedOptions {
            id: descriptor.id.clone(),
        });
    }
    if raw_options.len() > descriptor.options.len() {
        return Err(ParseError::TooManyOptions {
            id: descriptor.id.clone(),
            declared: descriptor.options.len(),
            parsed: raw_options.len(),
        });
    }

    let cmp = config.comparison;
    let prefixes_identical = cmp.eq(&config.option_prefix, &config.alias_prefix);
    let mut resolved = Vec::with_capacity(raw_options.len());

    for raw in raw_options {
        let value = match raw.value {
            Some(text) => OptionValue::Text(text),
            None => OptionValue::Switch,
        };

        if prefixes_identical {
            // Ambiguous prefix: an identifier match takes precedence over
            // an alias match.
            let bare = strip_prefix(&raw.key, &config.option_prefix, config);
            let (option, by_alias) = if let Some(option) = descriptor.find_option_by_id(bare, cmp)
            {
                (option, false)
            } else if let Some(option) = descriptor.find_option_by_alias(bare, cmp) {
                (option, true)
            } else {
                return Err(ParseError::UnknownOption {
                    id: descriptor.id.clone(),
                    key: bare.to_string(),
                });
            };
            resolved.push(ResolvedOption {
                id: option.id.clone(),
                by_alias,
                value,
            });
            continue;
        }

        let (bare, prefix) = classify_key(&raw.key, config);
        let option = match prefix {
            KeyPrefix::Id => {
                if let Some(option) = descriptor.find_option_by_id(bare, cmp) {
                    option
                } else if descriptor.find_option_by_alias(bare, cmp).is_some() {
                    return Err(ParseError::OptionPrefixMismatch {
                        id: descriptor.id.clone(),
                        key: bare.to_string(),
                        expected: "alias",
                    });
                } else {
                    return Err(ParseError::UnknownOption {
                        id: descriptor.id.clone(),
                        key: bare.to_string(),
                    });
                }
            }
            KeyPrefix::Alias => {
                if let Some(option) = descriptor.find_option_by_alias(bare, cmp) {
                    option
                } else if descriptor.find_option_by_id(bare, cmp).is_some() {
                    return Err(ParseError::OptionPrefixMismatch {
                        id: descriptor.id.clone(),
                        key: bare.to_string(),
                        expected: "id",
                    });
                } else {
                    return Err(ParseError::UnknownOption {
                        id: descriptor.id.clone(),
                        key: bare.to_string(),
                    });
                }
            }
        };

        resolved.push(ResolvedOption {
            id: option.id.clone(),
            by_alias: prefix == KeyPrefix::Alias,
            value,
        });
    }

    Ok(Some(Options::new(resolved)))
}

/// Classifies a key by the longest prefix it starts with, so `--name` is an
/// id key even when the alias prefix `-` also matches.
fn classify_key<'a>(key: &'a str, config: &ParserConfig) -> (&'a str, KeyPrefix) {
    let cmp = config.comparison;
    let by_id = cmp.starts_with(key, &config.option_prefix);
    let by_alias = cmp.starts_with(key, &config.alias_prefix);

    match (by_id, by_alias) {
        (true, true) => {
            if config.option_prefix.len() >= config.alias_prefix.len() {
                (strip_prefix(key, &config.option_prefix, config), KeyPrefix::Id)
            } else {
                (
                    strip_prefix(key, &config.alias_prefix, config),
                    KeyPrefix::Alias,
                )
            }
        }
        (true, false) => (strip_prefix(key, &config.option_prefix, config), KeyPrefix::Id),
        // A prefixless key can reach here: the collector records any
        // leftover non-marker segment as a key, e.g. a stray word after a
        // closed quoted value. The key passes through unstripped and falls
        // out as an unknown option.
        _ => (
            strip_prefix(key, &config.alias_prefix, config),
            KeyPrefix::Alias,
        ),
    }
}

fn strip_prefix<'a>(key: &'a str, prefix: &str, config: &ParserConfig) -> &'a str {
    if config.comparison.starts_with(key, prefix) {
        &key[prefix.len()..]
    } else {
        key
    }
}

#[cfg(test)]
mod tests {
    use command_router_core::{CommandKind, OptionDescriptor, ValueKind};

    use super::*;

    fn greet() -> Arc<CommandDescriptor> {
        Arc::new(
            CommandDescriptor::new("greet", "Greet", CommandKind::SubCommand)
                .with_option(OptionDescriptor::with_value("name", ValueKind::Text))
                .with_option(OptionDescriptor::switch("verbose").with_alias("v")),
        )
    }

    fn copy() -> Arc<CommandDescriptor> {
        Arc::new(
            CommandDescriptor::new("copy", "Copy", CommandKind::SubCommand)
                .with_argument(command_router_core::ArgumentDescriptor::required(
                    "source",
                    ValueKind::Text,
                ))
                .with_argument(command_router_core::ArgumentDescriptor::optional(
                    "dest",
                    ValueKind::Text,
                )),
        )
    }

    fn raw(key: &str, value: Option<&str>) -> RawOption {
        RawOption {
            key: key.to_string(),
            value: value.map(String::from),
        }
    }

    #[test]
    fn test_binds_arguments_in_order() {
        let config = ParserConfig::default();
        let command = bind(
            copy(),
            vec!["a.txt".to_string(), "b.txt".to_string()],
            Vec::new(),
            &config,
        )
        .unwrap();

        let arguments = command.arguments.unwrap();
        assert_eq!(arguments.value_of("source"), Some("a.txt"));
        assert_eq!(arguments.value_of("dest"), Some("b.txt"));
        assert!(command.options.is_none());
    }

    #[test]
    fn test_exact_capacity_succeeds_one_over_fails() {
        let config = ParserConfig::default();
        let two = vec!["a".to_string(), "b".to_string()];
        assert!(bind(copy(), two, Vec::new(), &config).is_ok());

        let three = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let err = bind(copy(), three, Vec::new(), &config).unwrap_err();
        assert_eq!(
            err,
            ParseError::TooManyArguments {
                id: "copy".into(),
                declared: 2,
                parsed: 3
            }
        );
    }

    #[test]
    fn test_arguments_on_argumentless_command() {
        let config = ParserConfig::default();
        let err = bind(greet(), vec!["x".to_string()], Vec::new(), &config).unwrap_err();
        assert_eq!(err, ParseError::UnsupportedArguments { id: "greet".into() });
    }

    #[test]
    fn test_binds_options_by_id_and_alias() {
        let config = ParserConfig::default();
        let command = bind(
            greet(),
            Vec::new(),
            vec![raw("--name", Some("John Doe")), raw("-v", None)],
            &config,
        )
        .unwrap();

        let options = command.options.unwrap();
        assert_eq!(options.value_of("name"), Some("John Doe"));
        assert_eq!(options.value_of("verbose"), Some("true"));
        assert!(options.get("verbose").unwrap().by_alias);
        assert!(!options.get("name").unwrap().by_alias);
    }

    #[test]
    fn test_options_on_optionless_command() {
        let config = ParserConfig::default();
        let err = bind(copy(), Vec::new(), vec![raw("--force", None)], &config).unwrap_err();
        assert_eq!(err, ParseError::UnsupportedOptions { id: "copy".into() });
    }

    #[test]
    fn test_more_options_than_declared() {
        let config = ParserConfig::default();
        let err = bind(
            greet(),
            Vec::new(),
            vec![
                raw("--name", Some("a")),
                raw("-v", None),
                raw("--name", Some("b")),
            ],
            &config,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ParseError::TooManyOptions {
                id: "greet".into(),
                declared: 2,
                parsed: 3
            }
        );
    }

    #[test]
    fn test_unknown_option() {
        let config = ParserConfig::default();
        let err = bind(greet(), Vec::new(), vec![raw("--nope", None)], &config).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownOption {
                id: "greet".into(),
                key: "nope".into()
            }
        );
    }

    #[test]
    fn test_id_via_alias_prefix_is_invalid() {
        // "verbose" is an id; passing it as "-verbose" must fail.
        let config = ParserConfig::default();
        let err = bind(greet(), Vec::new(), vec![raw("-verbose", None)], &config).unwrap_err();
        assert_eq!(
            err,
            ParseError::OptionPrefixMismatch {
                id: "greet".into(),
                key: "verbose".into(),
                expected: "id"
            }
        );
    }

    #[test]
    fn test_alias_via_id_prefix_is_invalid() {
        // "v" is an alias; passing it as "--v" must fail.
        let config = ParserConfig::default();
        let err = bind(greet(), Vec::new(), vec![raw("--v", None)], &config).unwrap_err();
        assert_eq!(
            err,
            ParseError::OptionPrefixMismatch {
                id: "greet".into(),
                key: "v".into(),
                expected: "alias"
            }
        );
    }

    #[test]
    fn test_prefixless_key_is_unknown_option() {
        // The collector can hand over a key with neither prefix (a stray
        // word after a closed quoted value); it must not bind to anything.
        let config = ParserConfig::default();
        let err = bind(greet(), Vec::new(), vec![raw("stray", None)], &config).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownOption {
                id: "greet".into(),
                key: "stray".into()
            }
        );
    }

    #[test]
    fn test_identical_prefixes_id_wins_on_tie() {
        // One option's alias is another option's id: the id match wins.
        let descriptor = Arc::new(
            CommandDescriptor::new("cmd", "Cmd", CommandKind::SubCommand)
                .with_option(OptionDescriptor::switch("other").with_alias("x"))
                .with_option(OptionDescriptor::switch("x")),
        );
        let config = ParserConfig {
            option_prefix: "-".to_string(),
            alias_prefix: "-".to_string(),
            ..ParserConfig::default()
        };

        let command = bind(descriptor, Vec::new(), vec![raw("-x", None)], &config).unwrap();
        let options = command.options.unwrap();
        let bound = options.get("x").expect("id match should win");
        assert!(!bound.by_alias);
    }

    #[test]
    fn test_identical_prefixes_fall_back_to_alias() {
        let config = ParserConfig {
            option_prefix: "-".to_string(),
            alias_prefix: "-".to_string(),
            ..ParserConfig::default()
        };

        let command = bind(greet(), Vec::new(), vec![raw("-v", None)], &config).unwrap();
        let options = command.options.unwrap();
        let bound = options.get("verbose").unwrap();
        assert!(bound.by_alias);
    }
}
