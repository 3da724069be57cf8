//! Pattern matching engine.
//!
//! A pattern is split into segments, each segment into chunks. Every chunk
//! is compared with the candidate through a cascade of rules, strongest
//! first:
//!
//! | Rule                 | Result                 | Example pattern → candidate     |
//! |----------------------|------------------------|---------------------------------|
//! | Whole text           | `Exact`                | `foo` → `Foo`                   |
//! | Leading text         | `Prefix`               | `IEnum` → `IEnumerable`         |
//! | Loose substring      | `Substring`            | `ode` → `Code` (opt-in)         |
//! | Lowercase at a word  | `Substring`            | `enum` → `IEnumerable`          |
//! | Mixed-case substring | `Substring`            | `Fix` → `CodeFixProvider`       |
//! | Camel-case humps     | `CamelCase*`           | `CFP`, `cofipro` → `CodeFixProvider` |
//! | Lowercase on capital | `Substring`            | `ml` → `XMLDoc`                 |
//! | Similarity (fuzzy)   | `Fuzzy`                | `Consloe` → `Console` (opt-in)  |

mod camel_case;
pub mod chunk;
pub(crate) mod container;
pub mod kind;
pub(crate) mod matcher;
pub mod segment;
pub mod similarity;
pub(crate) mod simple;


pub use chunk::TextChunk;
pub use kind::{PatternMatch, PatternMatchKind};
pub use segment::PatternSegment;
pub use similarity::SimilarityChecker;
