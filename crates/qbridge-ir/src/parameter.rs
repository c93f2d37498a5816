//! Gate parameters: free symbols, numbers and homogeneous sequences.

use crate::error::{IrError, IrResult};
use crate::idset::{Atom, IdentifierSet, NativeAtom, SetId};
use num_complex::Complex64;
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A free parameter of one circuit IR.
///
/// Repeated uses of the same native parameter resolve to one shared symbol.
#[derive(Debug, Clone, Serialize)]
pub struct Symbol {
    owner: SetId,
    index: usize,
    name: String,
}

impl Symbol {
    /// Parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.index == other.index
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.owner.hash(state);
        self.index.hash(state);
    }
}

impl Atom for Symbol {
    const KIND: &'static str = "parameter";

    fn create(owner: SetId, index: usize, label: String) -> Self {
        Self {
            owner,
            index,
            name: label,
        }
    }

    fn owner(&self) -> SetId {
        self.owner
    }

    fn index(&self) -> usize {
        self.index
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A numeric literal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Number {
    /// Integer.
    Int(i64),
    /// Real.
    Float(f64),
    /// Complex, used for matrix entries.
    Complex(Complex64),
}

impl Number {
    /// Real value, or `None` for a complex number with an imaginary part.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> Option<f64> {
        match self {
            Number::Int(v) => Some(v as f64),
            Number::Float(v) => Some(v),
            Number::Complex(c) if c.im == 0.0 => Some(c.re),
            Number::Complex(_) => None,
        }
    }

    /// Value as a complex number.
    #[allow(clippy::cast_precision_loss)]
    pub fn to_complex(self) -> Complex64 {
        match self {
            Number::Int(v) => Complex64::new(v as f64, 0.0),
            Number::Float(v) => Complex64::new(v, 0.0),
            Number::Complex(c) => c,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{v}"),
            Number::Float(v) => write!(f, "{v}"),
            Number::Complex(c) => write!(f, "{c}"),
        }
    }
}

/// A homogeneous list parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Sequence {
    /// All numbers, e.g. a flattened unitary matrix.
    Scalars(Vec<Number>),
    /// All symbols.
    Symbols(Vec<Symbol>),
}

impl Sequence {
    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            Sequence::Scalars(v) => v.len(),
            Sequence::Symbols(v) => v.len(),
        }
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One parameter operand of an instruction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Parameter {
    /// A free symbol.
    Symbolic(Symbol),
    /// A literal number.
    Scalar(Number),
    /// A homogeneous list.
    Sequence(Sequence),
}

impl Parameter {
    /// Real value of a scalar parameter.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Parameter::Scalar(n) => n.as_f64(),
            _ => None,
        }
    }

    /// The symbol, if this parameter is a free symbol.
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Parameter::Symbolic(s) => Some(s),
            _ => None,
        }
    }

    /// The list of numbers, if this parameter is a numeric sequence.
    pub fn as_scalars(&self) -> Option<&[Number]> {
        match self {
            Parameter::Sequence(Sequence::Scalars(v)) => Some(v),
            _ => None,
        }
    }

    /// Whether the value depends on a free symbol.
    pub fn is_symbolic(&self) -> bool {
        matches!(
            self,
            Parameter::Symbolic(_) | Parameter::Sequence(Sequence::Symbols(_))
        )
    }

    /// Whether this is a single real-valued operand, bound or free.
    pub fn is_angle(&self) -> bool {
        match self {
            Parameter::Symbolic(_) => true,
            Parameter::Scalar(n) => n.as_f64().is_some(),
            Parameter::Sequence(_) => false,
        }
    }
}

impl From<f64> for Parameter {
    fn from(value: f64) -> Self {
        Parameter::Scalar(Number::Float(value))
    }
}

impl From<i64> for Parameter {
    fn from(value: i64) -> Self {
        Parameter::Scalar(Number::Int(value))
    }
}

impl From<Symbol> for Parameter {
    fn from(value: Symbol) -> Self {
        Parameter::Symbolic(value)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::Symbolic(s) => write!(f, "{s}"),
            Parameter::Scalar(n) => write!(f, "{n}"),
            Parameter::Sequence(seq) => {
                f.write_str("[")?;
                match seq {
                    Sequence::Scalars(v) => write_joined(f, v)?,
                    Sequence::Symbols(v) => write_joined(f, v)?,
                }
                f.write_str("]")
            }
        }
    }
}

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// A parameter value as a vendor object model hands it over.
///
/// `K` is the vendor's native symbol type.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeValue<K> {
    /// Integer literal.
    Int(i64),
    /// Real literal.
    Float(f64),
    /// Complex literal.
    Complex(Complex64),
    /// Native free parameter.
    Symbol(K),
    /// List of values.
    List(Vec<NativeValue<K>>),
}

impl<K> NativeValue<K> {
    fn as_number(&self) -> Option<Number> {
        match self {
            NativeValue::Int(v) => Some(Number::Int(*v)),
            NativeValue::Float(v) => Some(Number::Float(*v)),
            NativeValue::Complex(c) => Some(Number::Complex(*c)),
            _ => None,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            NativeValue::Int(_) | NativeValue::Float(_) | NativeValue::Complex(_) => "number",
            NativeValue::Symbol(_) => "symbol",
            NativeValue::List(_) => "list",
        }
    }
}

/// Identifier set for free parameters.
pub type ParameterSet<K> = IdentifierSet<K, Symbol>;

impl<K: NativeAtom> IdentifierSet<K, Symbol> {
    /// Wrap a native parameter value.
    ///
    /// Symbols resolve to their shared atom. Lists must be flat and contain
    /// only numbers or only symbols.
    pub fn resolve(&mut self, value: &NativeValue<K>) -> IrResult<Parameter> {
        if let Some(n) = value.as_number() {
            return Ok(Parameter::Scalar(n));
        }
        match value {
            NativeValue::Symbol(k) => Ok(Parameter::Symbolic(self.get_one(k))),
            NativeValue::List(items) => self.resolve_list(items).map(Parameter::Sequence),
            _ => Err(IrError::InvalidParameterShape(value.kind().to_string())),
        }
    }

    fn resolve_list(&mut self, items: &[NativeValue<K>]) -> IrResult<Sequence> {
        let Some(first) = items.first() else {
            return Ok(Sequence::Scalars(Vec::new()));
        };
        match first {
            NativeValue::Symbol(_) => {
                let mut symbols = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        NativeValue::Symbol(k) => symbols.push(self.get_one(k)),
                        other => return Err(mixed_list(other)),
                    }
                }
                Ok(Sequence::Symbols(symbols))
            }
            NativeValue::List(_) => Err(IrError::InvalidParameterShape(
                "nested list".to_string(),
            )),
            _ => items
                .iter()
                .map(|item| item.as_number().ok_or_else(|| mixed_list(item)))
                .collect::<IrResult<Vec<_>>>()
                .map(Sequence::Scalars),
        }
    }
}

fn mixed_list<K>(item: &NativeValue<K>) -> IrError {
    IrError::InvalidParameterShape(format!("list mixes element kinds (found {})", item.kind()))
}
