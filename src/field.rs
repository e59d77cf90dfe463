use std::num::ParseIntError;

/// An integer field that can be assigned from base-10 text
pub trait IntegerSlot {
    /// Parse `raw` into the field, leaving it untouched on failure
    fn assign(&mut self, raw: &str) -> Result<(), ParseIntError>;

    fn type_name(&self) -> &'static str;
}

macro_rules! impl_integer_slot {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntegerSlot for $ty {
                fn assign(&mut self, raw: &str) -> Result<(), ParseIntError> {
                    *self = raw.parse::<$ty>()?;
                    Ok(())
                }

                fn type_name(&self) -> &'static str {
                    stringify!($ty)
                }
            }
        )*
    };
}

impl_integer_slot!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Typed, mutable view of a single field
pub enum FieldValue<'a> {
    Int(&'a mut dyn IntegerSlot),
    Str(&'a mut String),
    Bool(&'a mut bool),
    /// A field type with no coercion rule, carrying its type name
    Unsupported(&'static str),
}

impl FieldValue<'_> {
    /// Short name of the field's type tag, used in reports
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Int(slot) => slot.type_name(),
            FieldValue::Str(_) => "String",
            FieldValue::Bool(_) => "bool",
            FieldValue::Unsupported(type_name) => type_name,
        }
    }
}

impl<'a> From<&'a mut String> for FieldValue<'a> {
    fn from(value: &'a mut String) -> Self {
        FieldValue::Str(value)
    }
}

impl<'a> From<&'a mut bool> for FieldValue<'a> {
    fn from(value: &'a mut bool) -> Self {
        FieldValue::Bool(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'a> From<&'a mut $ty> for FieldValue<'a> {
                fn from(value: &'a mut $ty) -> Self {
                    FieldValue::Int(value)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Descriptor of one top-level field of a configuration record
pub struct FieldSlot<'a> {
    /// The field's own identifier, used when no tag is present
    pub ident: &'static str,
    /// Explicit lookup name
    pub tag: Option<&'static str>,
    /// Non-writable fields are skipped without error
    pub writable: bool,
    pub value: FieldValue<'a>,
}

impl<'a> FieldSlot<'a> {
    pub fn new(ident: &'static str, value: impl Into<FieldValue<'a>>) -> Self {
        Self {
            ident,
            tag: None,
            writable: true,
            value: value.into(),
        }
    }

    pub fn tagged(ident: &'static str, tag: &'static str, value: impl Into<FieldValue<'a>>) -> Self {
        Self {
            tag: Some(tag),
            ..Self::new(ident, value)
        }
    }

    pub fn unsupported(ident: &'static str, tag: Option<&'static str>, type_name: &'static str) -> Self {
        Self {
            ident,
            tag,
            writable: true,
            value: FieldValue::Unsupported(type_name),
        }
    }

    pub fn read_only(mut self) -> Self {
        self.writable = false;
        self
    }

    /// The name the field is looked up by, before any prefix
    pub fn lookup_name(&self, omit_not_tagged: bool) -> Option<&'static str> {
        match self.tag {
            Some(tag) => Some(tag),
            None if omit_not_tagged => None,
            None => Some(self.ident),
        }
    }
}

/// A configuration record whose top-level fields can be bound
///
/// Usually derived:
///
/// ```rust
/// use config_bindr::Extract;
///
/// #[derive(Extract, Default)]
/// pub struct Server {
///     #[field(name = "PORT")]
///     pub port: i64,
///     pub host: String,
/// }
/// ```
pub trait Extract {
    /// Field descriptors in declaration order
    fn fields(&mut self) -> Vec<FieldSlot<'_>>;
}
