//! Geometry Theorem Statement Conversion
//!
//! Lowers externally authored construction statement commands into typed
//! theorem statements consumable by algebraic proof engines.

pub mod model;   // Data model (geometric objects, protocol, commands, statements)
pub mod convert; // Statement converter (resolution, dispatch, batch driver)
pub mod loader;  // Theorem file ingestion (JSON)

pub use model::{
    Angle, AuxiliaryObjects, Circle, CommandKind, ConstructionProtocol, ConstructionStep,
    GeoObject, Line, ObjectKind, Point, Segment, StatementCommand, StatementKind, ThmStatement,
};
pub use convert::{ConvertError, ConvertResult, Converter, Namespace};
pub use loader::{LoadError, LoadResult, LoadedTheorem};
