//! Tree node definitions.

mod decl;
mod expr;
mod stmt;

pub use decl::{
    Decl, Field, FieldList, File, FuncDecl, GenDecl, ImportSpec, Spec, TypeSpec, ValueSpec,
};
pub use expr::{
    ArrayType, BasicLit, BinaryExpr, CallExpr, ChanType, CompositeLit, Ellipsis, Expr, FuncLit,
    FuncType, Ident, IndexExpr, IndexListExpr, InterfaceType, KeyValueExpr, MapType, ParenExpr,
    SelectorExpr, SliceExpr, StarExpr, StructType, TypeAssertExpr, UnaryExpr, unparen_slot,
};
pub use stmt::{
    AssignStmt, BlockStmt, BranchStmt, CaseClause, CommClause, DeclStmt, DeferStmt, ExprStmt,
    ForStmt, GoStmt, IfStmt, IncDecStmt, LabeledStmt, RangeStmt, ReturnStmt, SelectStmt,
    SendStmt, Stmt, SwitchStmt, TypeSwitchStmt,
};
