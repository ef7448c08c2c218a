//! Reference-shape coercion
//!
//! | Wanted | Input | Expression |
//! |--------|-------|------------|
//! | `T` (interface) | `T` (not interface) | `&x` |
//! | same type | same type | `x` |
//! | `*T` | `T` | `&x` |
//! | `T` (interface) | `*T` | `x` |
//! | `T` | `*T` | `*x` |
//! | interface `I` | value of another type | `&x` |
//! | interface `I` | pointer or interface of another type | `x` |
//!
//! "Same type" compares base name and pointer depth. Any other pairing is
//! a bug in resolution and fails with [`Error::Coercion`].

use diwire_domain::error::{Error, Result};
use diwire_domain::{TypeKind, TypeName, Variable};

/// Expression passing `input` where a `wanted` of `wanted_kind` is expected
pub fn coerce(wanted: &TypeName, wanted_kind: TypeKind, input: &Variable) -> Result<String> {
    let name = &input.name;
    let have = &input.type_name;

    if wanted == have {
        if wanted_kind.is_interface() && !input.kind.is_interface() {
            return Ok(format!("&{name}"));
        }
        return Ok(name.clone());
    }

    if wanted.same_base(have) {
        let (w, h) = (wanted.pointer_depth(), have.pointer_depth());
        if w == h + 1 {
            return Ok(format!("&{name}"));
        }
        if w + 1 == h {
            if wanted_kind.is_interface() {
                return Ok(name.clone());
            }
            return Ok(format!("*{name}"));
        }
    } else if wanted_kind.is_interface() && !wanted.is_pointer() {
        if have.is_pointer() || input.kind.is_interface() {
            return Ok(name.clone());
        }
        return Ok(format!("&{name}"));
    }

    Err(Error::coercion(wanted.to_string(), format!("{name} {have}")))
}
