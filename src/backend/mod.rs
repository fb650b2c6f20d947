//! # Backend Module
//!
//! Everything that touches the Quadbeat backend's HTTP contract lives here. The
//! module is split along the three steps every flow goes through:
//!
//! ```text
//! Controller / Playlist manager
//!          ↓
//! request    - builds an HttpRequestSpec for an endpoint
//!          ↓
//! transport  - sends it (reqwest in production, scripted in tests)
//!          ↓
//! normalize  - classifies the RawResponse into an Outcome or playlist result
//! ```
//!
//! ## Endpoints
//!
//! | Operation | Method | Path | Parameters |
//! |---|---|---|---|
//! | Search | GET | `/search` | `query` |
//! | Recommend | GET | `/recommend` | `songId`, `graphType`, `algorithm` |
//! | Load playlist | GET | `/playlist` | `sessionId` |
//! | Add to playlist | POST | `/playlist/add` | `sessionId`, Song JSON body |
//! | Remove from playlist | DELETE | `/playlist/remove` | `sessionId`, `songId` |
//! | Clear playlist | DELETE | `/playlist/clear` | `sessionId` |
//!
//! All query parameters are percent-encoded. Mood recommendations put the mood
//! label into `songId`; the backend resolves it to a seed song itself.
//!
//! ## Failure classes
//!
//! - Transport: non-2xx status, network error, timeout, unreadable body
//! - No results: the service answered but found nothing (`{message}` or `[]`)
//! - Declined: a playlist mutation answered 2xx with `success: false`
//!
//! The first two surface through [`normalize::Outcome`], the last through
//! [`normalize::PlaylistError`].

pub mod normalize;
pub mod request;
pub mod transport;
