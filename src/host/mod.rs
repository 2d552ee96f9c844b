//! Reference host: an in-memory owner of the board state.
//!
//! Embedding applications normally bring their own game-state store. `Table`
//! is the small one used by the CLI and the integration tests: it holds the
//! snapshot, the selection and the turn, applies what the view requests and
//! keeps an undo history.

mod table;

pub use table::Table;
