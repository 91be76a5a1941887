//! Domain Layer
//!
//! Query preview logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - `LogicalFile`, the per-name state bundle
//! - `value_objects/` - `Record`, `FileKind`, `FileName`
//! - `services/` - JSON flattening
//! - `ports/` - `QueryService`, the remote API boundary
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
