use num_bigint::BigUint;

use super::ident::Ident;

#[derive(Debug, Clone)]
pub enum Exp {
    Var(Ident),
    /// A tag literal; tags are strings in the generated code.
    TagLit(String),
    Num(BigUint),
    Str(String),
    /// Tuples are arrays in the generated code.
    Array(Vec<Exp>),
    Call(Call),
    /// A call of a generated union operation, e.g. `Shape.from(x)`.
    MethodCall(MethodCall),
    /// Direct construction of a tagged value whose case membership was
    /// established at build time.
    NewTagged(NewTagged),
    Dispatch(DispatchExp),
}

#[derive(Debug, Clone)]
pub struct Call {
    pub callee: Ident,
    pub args: Vec<Exp>,
}

#[derive(Debug, Clone)]
pub struct MethodCall {
    pub object: Ident,
    pub method: String,
    pub args: Vec<Exp>,
}

#[derive(Debug, Clone)]
pub struct NewTagged {
    pub union: String,
    pub tag: String,
    pub args: Vec<Exp>,
}

/// The verified dispatch: a structural guard followed by one arm per clause,
/// first match wins.
#[derive(Debug, Clone)]
pub struct DispatchExp {
    pub union: String,
    pub scrutinee: Box<Exp>,
    pub arms: Vec<Arm>,
}

#[derive(Debug, Clone)]
pub struct Arm {
    /// `None` is the wildcard arm.
    pub pattern: Option<ArmPattern>,
    pub guard: Option<Exp>,
    pub body: Exp,
}

#[derive(Debug, Clone)]
pub struct ArmPattern {
    pub tag: String,
    /// One slot per argument; `None` for binders written as `_`.
    pub binders: Vec<Option<Ident>>,
}
