//! Commands the host UI feeds into a launcher session.
//!
//! This module defines the vocabulary shared between the embedding UI and
//! the [`DragSession`](crate::session::DragSession): [`Command`] describes
//! every input the session reacts to, and [`PointerSample`] carries live
//! pointer coordinates during a gesture.
//!
//! The host forwards raw events; the session interprets them.  On the
//! wire (see [`bridge`](crate::bridge)) each command is one JSON value:
//!
//! ```json
//! {"SetItems":[{"id":"mail","kind":"app"},{"id":"games","kind":"folder"}]}
//! {"DragBegan":{"id":"mail","at":{"x":20.0,"y":70.0}}}
//! {"DragMoved":{"at":"150 300"}}
//! {"DragEnded":{"at":{"x":150.0,"y":300.0}}}
//! "CancelDrag"
//! ```

use crate::item::ItemSpec;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A pointer position in absolute logical pixels.
///
/// Accepts `{"x":150.0,"y":300.0}` or the string `"x y"` on the wire —
/// some hosts serialize touch samples as packed strings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

impl<'de> Deserialize<'de> for PointerSample {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Visitor;
        struct V;
        impl<'de> Visitor<'de> for V {
            type Value = PointerSample;
            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "object {{x, y}} or string \"x y\"")
            }
            fn visit_map<A>(self, mut map: A) -> Result<PointerSample, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut x = None;
                let mut y = None;
                while let Some(k) = map.next_key::<String>()? {
                    match k.as_str() {
                        "x" => x = Some(map.next_value()?),
                        "y" => y = Some(map.next_value()?),
                        _ => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }
                Ok(PointerSample {
                    x: x.ok_or_else(|| DeError::missing_field("x"))?,
                    y: y.ok_or_else(|| DeError::missing_field("y"))?,
                })
            }
            fn visit_str<E>(self, s: &str) -> Result<PointerSample, E>
            where
                E: DeError,
            {
                let parts: Vec<&str> = s.trim().split_whitespace().collect();
                if parts.len() != 2 {
                    return Err(DeError::custom(format!(
                        "pointer sample: expected \"x y\", got {:?}",
                        s
                    )));
                }
                let x: f64 = parts[0]
                    .parse()
                    .map_err(|_| DeError::custom("pointer sample: x must be a number"))?;
                let y: f64 = parts[1]
                    .parse()
                    .map_err(|_| DeError::custom("pointer sample: y must be a number"))?;
                Ok(PointerSample { x, y })
            }
        }
        deserializer.deserialize_any(V)
    }
}

/// Every input a launcher session reacts to.
///
/// Commands are produced by [`EventSource`](crate::traits::EventSource)
/// implementations (or called directly by the host) and consumed by the
/// [`DragSession`](crate::session::DragSession).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// The authoritative item list changed shape (install, uninstall,
    /// folder created or dissolved, manual reorder).
    ///
    /// The list arrives already sorted in the desired display order; the
    /// session rebuilds the entire layout from it.  An in-flight drag is
    /// abandoned — its item may no longer exist.
    SetItems(Vec<ItemSpec>),

    /// A long-press picked up the item with the given id.
    DragBegan { id: String, at: PointerSample },

    /// The pointer moved while an item is held.
    ///
    /// The session answers with highlight feedback for the prospective
    /// drop cell; nothing is committed yet.
    DragMoved { at: PointerSample },

    /// The pointer was released, ending the gesture.
    ///
    /// The session resolves the drop cell and commits the move if the
    /// target region is available; otherwise the item stays where it was.
    DragEnded { at: PointerSample },

    /// Abort an in-flight gesture without committing anything (e.g. an
    /// incoming call stole the touch).
    ///
    /// On the wire this is encoded as the JSON string `"CancelDrag"`.
    CancelDrag,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemKind;

    #[test]
    fn command_equality() {
        assert_eq!(Command::CancelDrag, Command::CancelDrag);
        assert_ne!(
            Command::DragMoved {
                at: PointerSample { x: 1.0, y: 2.0 }
            },
            Command::DragMoved {
                at: PointerSample { x: 1.0, y: 3.0 }
            }
        );
    }

    #[test]
    fn pointer_sample_from_object() {
        let p: PointerSample = serde_json::from_str(r#"{"x":150.0,"y":300.5}"#).unwrap();
        assert_eq!(p, PointerSample { x: 150.0, y: 300.5 });
    }

    #[test]
    fn pointer_sample_from_string() {
        let p: PointerSample = serde_json::from_str(r#""150 300.5""#).unwrap();
        assert_eq!(p, PointerSample { x: 150.0, y: 300.5 });
    }

    #[test]
    fn pointer_sample_ignores_unknown_keys() {
        let p: PointerSample =
            serde_json::from_str(r#"{"x":1.0,"y":2.0,"timestamp":123456}"#).unwrap();
        assert_eq!(p, PointerSample { x: 1.0, y: 2.0 });
    }

    #[test]
    fn pointer_sample_rejects_garbage() {
        assert!(serde_json::from_str::<PointerSample>(r#""150""#).is_err());
        assert!(serde_json::from_str::<PointerSample>(r#""a b""#).is_err());
        assert!(serde_json::from_str::<PointerSample>(r#"{"x":1.0}"#).is_err());
    }

    #[test]
    fn commands_deserialize_from_wire_format() {
        let cmd: Command =
            serde_json::from_str(r#"{"SetItems":[{"id":"mail","kind":"app"}]}"#).unwrap();
        assert_eq!(
            cmd,
            Command::SetItems(vec![ItemSpec {
                id: "mail".into(),
                kind: ItemKind::App,
            }])
        );

        let cmd: Command =
            serde_json::from_str(r#"{"DragBegan":{"id":"mail","at":"20 70"}}"#).unwrap();
        assert_eq!(
            cmd,
            Command::DragBegan {
                id: "mail".into(),
                at: PointerSample { x: 20.0, y: 70.0 },
            }
        );

        let cmd: Command = serde_json::from_str(r#""CancelDrag""#).unwrap();
        assert_eq!(cmd, Command::CancelDrag);
    }
}
