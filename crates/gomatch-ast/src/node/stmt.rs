//! Statement nodes.

use crate::node::{CallExpr, Decl, Expr, Ident};
use crate::slot::{Seq, Slot, TokenSlot};

/// A braced statement list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockStmt {
    /// Statements.
    pub list: Seq<Stmt>,
}

/// A declaration in statement position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeclStmt {
    /// The declaration.
    pub decl: Slot<Decl>,
}

/// `label: stmt`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabeledStmt {
    /// Label.
    pub label: Slot<Ident>,
    /// Labeled statement.
    pub stmt: Slot<Stmt>,
}

/// An expression evaluated for its effect.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExprStmt {
    /// The expression.
    pub x: Slot<Expr>,
}

/// `ch <- value`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SendStmt {
    /// Channel.
    pub chan: Slot<Expr>,
    /// Sent value.
    pub value: Slot<Expr>,
}

/// `x++` or `x--`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IncDecStmt {
    /// Operand.
    pub x: Slot<Expr>,
    /// `Inc` or `Dec`.
    pub tok: TokenSlot,
}

/// An assignment or short variable declaration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignStmt {
    /// Left-hand side.
    pub lhs: Seq<Expr>,
    /// Assignment token.
    pub tok: TokenSlot,
    /// Right-hand side.
    pub rhs: Seq<Expr>,
}

/// `go f()`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoStmt {
    /// Spawned call.
    pub call: Slot<CallExpr>,
}

/// `defer f()`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeferStmt {
    /// Deferred call.
    pub call: Slot<CallExpr>,
}

/// `return results`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReturnStmt {
    /// Returned values.
    pub results: Seq<Expr>,
}

/// `break`, `continue`, `goto` or `fallthrough`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BranchStmt {
    /// Keyword token.
    pub tok: TokenSlot,
    /// Target label.
    pub label: Slot<Ident>,
}

/// `if init; cond { body } else els`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IfStmt {
    /// Initialization statement.
    pub init: Slot<Stmt>,
    /// Condition.
    pub cond: Slot<Expr>,
    /// Then branch.
    pub body: Slot<BlockStmt>,
    /// Else branch.
    pub els: Slot<Stmt>,
}

/// A `case` or `default` clause of a switch; `default` has an empty list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseClause {
    /// Case expressions.
    pub list: Seq<Expr>,
    /// Clause body.
    pub body: Seq<Stmt>,
}

/// An expression switch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwitchStmt {
    /// Initialization statement.
    pub init: Slot<Stmt>,
    /// Switch tag.
    pub tag: Slot<Expr>,
    /// Case clauses.
    pub body: Slot<BlockStmt>,
}

/// A type switch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeSwitchStmt {
    /// Initialization statement.
    pub init: Slot<Stmt>,
    /// `x := y.(type)` or `y.(type)`.
    pub assign: Slot<Stmt>,
    /// Case clauses.
    pub body: Slot<BlockStmt>,
}

/// A `case` or `default` clause of a select.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommClause {
    /// Send or receive statement, nil for `default`.
    pub comm: Slot<Stmt>,
    /// Clause body.
    pub body: Seq<Stmt>,
}

/// A select statement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectStmt {
    /// Communication clauses.
    pub body: Slot<BlockStmt>,
}

/// A three-clause or condition-only for loop.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForStmt {
    /// Initialization statement.
    pub init: Slot<Stmt>,
    /// Condition.
    pub cond: Slot<Expr>,
    /// Post statement.
    pub post: Slot<Stmt>,
    /// Loop body.
    pub body: Slot<BlockStmt>,
}

/// A `for key, value := range x` loop.
///
/// `tok` is [`crate::Token::Illegal`] when there is no key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RangeStmt {
    /// Key, nil when absent.
    pub key: Slot<Expr>,
    /// Value, nil when absent.
    pub value: Slot<Expr>,
    /// `Assign`, `Define` or `Illegal`.
    pub tok: TokenSlot,
    /// Ranged-over expression.
    pub x: Slot<Expr>,
    /// Loop body.
    pub body: Slot<BlockStmt>,
}

/// Any statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `;`
    Empty,
    /// `var x int`
    Decl(DeclStmt),
    /// `l: s`
    Labeled(LabeledStmt),
    /// `f()`
    Expr(ExprStmt),
    /// `ch <- v`
    Send(SendStmt),
    /// `x++`
    IncDec(IncDecStmt),
    /// `a = b`
    Assign(AssignStmt),
    /// `go f()`
    Go(GoStmt),
    /// `defer f()`
    Defer(DeferStmt),
    /// `return x`
    Return(ReturnStmt),
    /// `break`
    Branch(BranchStmt),
    /// `{ ... }`
    Block(BlockStmt),
    /// `if ...`
    If(IfStmt),
    /// `case ...:`
    CaseClause(CaseClause),
    /// `switch ...`
    Switch(SwitchStmt),
    /// `switch x.(type)`
    TypeSwitch(TypeSwitchStmt),
    /// select `case ...:`
    CommClause(CommClause),
    /// `select { ... }`
    Select(SelectStmt),
    /// `for ...`
    For(ForStmt),
    /// `for ... range ...`
    Range(RangeStmt),
}

impl From<BlockStmt> for Stmt {
    fn from(block: BlockStmt) -> Self {
        Self::Block(block)
    }
}

impl From<Slot<BlockStmt>> for Slot<Stmt> {
    fn from(slot: Slot<BlockStmt>) -> Self {
        slot.map(Stmt::Block)
    }
}
