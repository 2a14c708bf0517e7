//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the application core and an
//! external system (time, filesystem, IDs, the editor process, the issue
//! tracker). Implementations live in `src/adapters/`.

pub mod clock;
pub mod editor;
pub mod filesystem;
pub mod id_gen;
pub mod issues;

pub use clock::Clock;
pub use editor::{Editor, EditorExit};
pub use filesystem::FileSystem;
pub use id_gen::IdGenerator;
pub use issues::{
    Issue, IssueFuture, IssueState, IssueTracker, IssueUpdate, NewIssue, Repo, SearchFuture,
    SearchResult, User,
};
