//! Expression nodes.

use crate::id::NodeId;
use crate::literal::{LitKind, LitValue};
use crate::node::{BlockStmt, FieldList};
use crate::slot::{Seq, Slot, TokenSlot};
use crate::token::ChanDir;

/// An identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ident {
    /// Node identity.
    pub id: NodeId,
    /// Identifier text.
    pub name: String,
}

impl Ident {
    /// Creates a pattern identifier with the default id.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: NodeId::DUMMY,
            name: name.into(),
        }
    }

    /// Returns `true` for the blank identifier `_`.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.name == "_"
    }
}

/// A literal of basic type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BasicLit {
    /// Node identity.
    pub id: NodeId,
    /// Literal category.
    pub kind: LitKind,
    /// Literal source text, quotes included.
    pub value: String,
}

impl BasicLit {
    /// Creates a pattern literal with the default id.
    #[must_use]
    pub fn new(kind: LitKind, value: impl Into<String>) -> Self {
        Self {
            id: NodeId::DUMMY,
            kind,
            value: value.into(),
        }
    }

    /// Returns the parsed value, or `None` when the text is malformed.
    #[must_use]
    pub fn parsed(&self) -> Option<LitValue> {
        LitValue::parse(self.kind, &self.value)
    }
}

/// A composite literal such as `T{a, b}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompositeLit {
    /// Node identity.
    pub id: NodeId,
    /// Literal type, nil when elided.
    pub ty: Slot<Expr>,
    /// Elements.
    pub elts: Seq<Expr>,
}

/// A function literal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FuncLit {
    /// Node identity.
    pub id: NodeId,
    /// Function type.
    pub ty: Slot<FuncType>,
    /// Function body.
    pub body: Slot<BlockStmt>,
}

/// A parenthesized expression.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParenExpr {
    /// Node identity.
    pub id: NodeId,
    /// Inner expression.
    pub x: Slot<Expr>,
}

/// A selector such as `x.sel`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectorExpr {
    /// Node identity.
    pub id: NodeId,
    /// Operand.
    pub x: Slot<Expr>,
    /// Selected field or method name.
    pub sel: Slot<Ident>,
}

/// An index expression `x[i]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexExpr {
    /// Node identity.
    pub id: NodeId,
    /// Operand.
    pub x: Slot<Expr>,
    /// Index.
    pub index: Slot<Expr>,
}

/// A generic instantiation with several type arguments `x[A, B]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexListExpr {
    /// Node identity.
    pub id: NodeId,
    /// Operand.
    pub x: Slot<Expr>,
    /// Type arguments.
    pub indices: Seq<Expr>,
}

/// A slice expression `x[low:high:max]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SliceExpr {
    /// Node identity.
    pub id: NodeId,
    /// Operand.
    pub x: Slot<Expr>,
    /// Low bound.
    pub low: Slot<Expr>,
    /// High bound.
    pub high: Slot<Expr>,
    /// Capacity bound.
    pub max: Slot<Expr>,
    /// Whether the three-index form was written.
    pub slice3: bool,
}

/// A type assertion `x.(T)`; `ty` is nil for `x.(type)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeAssertExpr {
    /// Node identity.
    pub id: NodeId,
    /// Operand.
    pub x: Slot<Expr>,
    /// Asserted type.
    pub ty: Slot<Expr>,
}

/// A call or conversion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallExpr {
    /// Node identity.
    pub id: NodeId,
    /// Called function expression.
    pub fun: Slot<Expr>,
    /// Arguments.
    pub args: Seq<Expr>,
    /// Whether the last argument is spread with `...`.
    pub ellipsis: bool,
}

/// A dereference or pointer type `*x`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StarExpr {
    /// Node identity.
    pub id: NodeId,
    /// Operand.
    pub x: Slot<Expr>,
}

/// A unary expression.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnaryExpr {
    /// Node identity.
    pub id: NodeId,
    /// Operator.
    pub op: TokenSlot,
    /// Operand.
    pub x: Slot<Expr>,
}

/// A binary expression.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BinaryExpr {
    /// Node identity.
    pub id: NodeId,
    /// Left operand.
    pub x: Slot<Expr>,
    /// Operator.
    pub op: TokenSlot,
    /// Right operand.
    pub y: Slot<Expr>,
}

/// A `key: value` pair in a composite literal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyValueExpr {
    /// Node identity.
    pub id: NodeId,
    /// Key.
    pub key: Slot<Expr>,
    /// Value.
    pub value: Slot<Expr>,
}

/// `...T` in a variadic parameter list or `[...]T` array length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ellipsis {
    /// Node identity.
    pub id: NodeId,
    /// Element type, nil in array lengths.
    pub elt: Slot<Expr>,
}

/// An array or slice type; `len` is nil for slices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayType {
    /// Node identity.
    pub id: NodeId,
    /// Length expression.
    pub len: Slot<Expr>,
    /// Element type.
    pub elt: Slot<Expr>,
}

/// A struct type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructType {
    /// Node identity.
    pub id: NodeId,
    /// Field declarations.
    pub fields: Slot<FieldList>,
}

/// A function signature.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FuncType {
    /// Node identity.
    pub id: NodeId,
    /// Type parameters.
    pub type_params: Slot<FieldList>,
    /// Parameters.
    pub params: Slot<FieldList>,
    /// Results.
    pub results: Slot<FieldList>,
}

/// An interface type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterfaceType {
    /// Node identity.
    pub id: NodeId,
    /// Methods and embedded elements.
    pub methods: Slot<FieldList>,
}

/// A map type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapType {
    /// Node identity.
    pub id: NodeId,
    /// Key type.
    pub key: Slot<Expr>,
    /// Value type.
    pub value: Slot<Expr>,
}

/// A channel type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChanType {
    /// Node identity.
    pub id: NodeId,
    /// Channel direction.
    pub dir: ChanDir,
    /// Element type.
    pub value: Slot<Expr>,
}

/// Any expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `x`
    Ident(Ident),
    /// `1`, `"s"`
    BasicLit(BasicLit),
    /// `T{...}`
    CompositeLit(CompositeLit),
    /// `func() {...}`
    FuncLit(FuncLit),
    /// `(x)`
    Paren(ParenExpr),
    /// `x.sel`
    Selector(SelectorExpr),
    /// `x[i]`
    Index(IndexExpr),
    /// `x[A, B]`
    IndexList(IndexListExpr),
    /// `x[lo:hi]`
    Slice(SliceExpr),
    /// `x.(T)`
    TypeAssert(TypeAssertExpr),
    /// `f(args)`
    Call(CallExpr),
    /// `*x`
    Star(StarExpr),
    /// `op x`
    Unary(UnaryExpr),
    /// `x op y`
    Binary(BinaryExpr),
    /// `key: value`
    KeyValue(KeyValueExpr),
    /// `...T`
    Ellipsis(Ellipsis),
    /// `[n]T`, `[]T`
    ArrayType(ArrayType),
    /// `struct{...}`
    StructType(StructType),
    /// `func(...) ...`
    FuncType(FuncType),
    /// `interface{...}`
    InterfaceType(InterfaceType),
    /// `map[K]V`
    MapType(MapType),
    /// `chan T`
    ChanType(ChanType),
}

impl Expr {
    /// Returns the node identity.
    #[must_use]
    pub const fn id(&self) -> NodeId {
        match self {
            Self::Ident(e) => e.id,
            Self::BasicLit(e) => e.id,
            Self::CompositeLit(e) => e.id,
            Self::FuncLit(e) => e.id,
            Self::Paren(e) => e.id,
            Self::Selector(e) => e.id,
            Self::Index(e) => e.id,
            Self::IndexList(e) => e.id,
            Self::Slice(e) => e.id,
            Self::TypeAssert(e) => e.id,
            Self::Call(e) => e.id,
            Self::Star(e) => e.id,
            Self::Unary(e) => e.id,
            Self::Binary(e) => e.id,
            Self::KeyValue(e) => e.id,
            Self::Ellipsis(e) => e.id,
            Self::ArrayType(e) => e.id,
            Self::StructType(e) => e.id,
            Self::FuncType(e) => e.id,
            Self::InterfaceType(e) => e.id,
            Self::MapType(e) => e.id,
            Self::ChanType(e) => e.id,
        }
    }

    /// Strips any number of enclosing parentheses.
    #[must_use]
    pub fn unparen(&self) -> &Self {
        let mut expr = self;
        while let Self::Paren(paren) = expr {
            match paren.x.as_node() {
                Some(inner) => expr = inner,
                None => break,
            }
        }
        expr
    }
}

/// Strips enclosing parentheses from a slot, stopping at holes and nil.
#[must_use]
pub fn unparen_slot(slot: &Slot<Expr>) -> &Slot<Expr> {
    let mut current = slot;
    while let Slot::Node(expr) = current {
        let Expr::Paren(paren) = expr.as_ref() else {
            break;
        };
        current = &paren.x;
    }
    current
}

impl From<Ident> for Expr {
    fn from(ident: Ident) -> Self {
        Self::Ident(ident)
    }
}

impl From<BasicLit> for Expr {
    fn from(lit: BasicLit) -> Self {
        Self::BasicLit(lit)
    }
}

impl From<CallExpr> for Expr {
    fn from(call: CallExpr) -> Self {
        Self::Call(call)
    }
}

impl From<FuncType> for Expr {
    fn from(func: FuncType) -> Self {
        Self::FuncType(func)
    }
}

impl From<SelectorExpr> for Expr {
    fn from(sel: SelectorExpr) -> Self {
        Self::Selector(sel)
    }
}

impl From<Slot<Ident>> for Slot<Expr> {
    fn from(slot: Slot<Ident>) -> Self {
        slot.map(Expr::Ident)
    }
}

impl From<Slot<BasicLit>> for Slot<Expr> {
    fn from(slot: Slot<BasicLit>) -> Self {
        slot.map(Expr::BasicLit)
    }
}

impl From<Slot<CallExpr>> for Slot<Expr> {
    fn from(slot: Slot<CallExpr>) -> Self {
        slot.map(Expr::Call)
    }
}

impl From<Slot<FuncType>> for Slot<Expr> {
    fn from(slot: Slot<FuncType>) -> Self {
        slot.map(Expr::FuncType)
    }
}
