//! Domain entities
//!
//! | Entity | Role |
//! |--------|------|
//! | [`Dependency`] | A type some consumer needs |
//! | [`Declaration`] | The strategy that constructs it |
//! | [`Function`] | The provider signature being generated |

mod declaration;
mod dependency;
mod function;

pub use declaration::{Declaration, External, FunctionProvider, Struct};
pub use dependency::{Dependency, StructField, TypeRef};
pub use function::{Aliases, Function};
