//! The value model and expression AST shared across the engine.

pub(crate) mod array;
pub(crate) mod bytes;
pub(crate) mod expression;
pub(crate) mod field;
pub(crate) mod geopoint;
pub(crate) mod number;
pub(crate) mod object;
pub(crate) mod ordering;
pub(crate) mod reference;
pub(crate) mod result;
pub(crate) mod strand;
pub(crate) mod timestamp;
pub(crate) mod value;
pub(crate) mod vector;

pub use self::array::Array;
pub use self::bytes::Bytes;
pub use self::expression::Expr;
pub use self::expression::FunctionExpr;
pub use self::field::FieldPath;
pub use self::field::KEY_FIELD;
pub use self::field::UPDATE_TIME_FIELD;
pub use self::geopoint::GeoPoint;
pub use self::number::Number;
pub use self::object::Object;
pub use self::ordering::Direction;
pub use self::ordering::Ordering;
pub use self::reference::Reference;
pub use self::result::EvaluateResult;
pub use self::strand::Strand;
pub use self::timestamp::Timestamp;
pub use self::value::TryAdd;
pub use self::value::TryDiv;
pub use self::value::TryMul;
pub use self::value::TryRem;
pub use self::value::TrySub;
pub use self::value::TypeOrder;
pub use self::value::Value;
pub use self::vector::Vector;
