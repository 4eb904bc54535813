//! Emission of the generated JavaScript module.
//!
//! The target is a host without native algebraic data types: tagged values
//! are plain objects `{ union, tag, args }`, tuples are arrays, and each
//! union becomes an object carrying its case enumeration and construction
//! operations. Dispatches become an if-chain over the tag field; by the time
//! we get here the clause set is known exhaustive and tag-valid, so emission
//! performs no further checking.

use pretty::DocAllocator;
use variant_lang_printer::{Alloc, Builder, Print, PrintCfg, PrintToString};

use crate::ir;

/// The generated code uses two-space indentation.
const JS_INDENT: isize = 2;

/// Runtime support emitted at the top of every generated module.
const PRELUDE: &str = r#"export class UndefinedUnionCaseError extends Error {}
export class StructuralMismatchError extends Error {}

function __isTagged(value, union) {
  return typeof value === "object" && value !== null && value.union === union;
}

function __caseOf(value) {
  if (Array.isArray(value)) {
    return { tag: value[0], args: value.slice(1), nested: value.length > 1 };
  }
  return { tag: value, args: [], nested: false };
}

function __undefinedCase(tag, nested) {
  return new UndefinedUnionCaseError(
    "undefined union case: " + String(tag) + (nested ? " in _" : "")
  );
}"#;

/// The construction operations shared by every generated union object.
const UNION_METHODS: &str = r#"has(tag, arity) {
  return this.cases.some((c) => c.tag === tag && c.arity === arity);
},
from(value) {
  const probe = __caseOf(value);
  if (!this.has(probe.tag, probe.args.length)) {
    throw __undefinedCase(probe.tag, probe.nested);
  }
  return { union: this.union, tag: probe.tag, args: probe.args };
},
fromOr(value, fallback) {
  const probe = __caseOf(value);
  if (!this.has(probe.tag, probe.args.length)) {
    return fallback;
  }
  return { union: this.union, tag: probe.tag, args: probe.args };
},
c(tag, ...args) {
  if (!this.has(tag, args.length)) {
    throw __undefinedCase(tag, args.length > 0);
  }
  return { union: this.union, tag, args };
},"#;

pub fn emit_module(module: &ir::Module) -> String {
    let cfg = PrintCfg { width: variant_lang_printer::DEFAULT_WIDTH, indent: JS_INDENT };
    module.print_to_string(Some(&cfg))
}

/// Quote a string for the generated source.
fn js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// A block of already-formatted lines, joined with hardlines so surrounding
/// nesting applies.
fn lines<'a>(text: &'a str, alloc: &'a Alloc<'a>) -> Builder<'a> {
    alloc.intersperse(text.lines().map(|line| alloc.text(line)), alloc.hardline())
}

fn comma_list(items: impl IntoIterator<Item = String>) -> String {
    items.into_iter().collect::<Vec<_>>().join(", ")
}

impl Print for ir::Module {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let ir::Module { unions, defs } = self;
        let sep = alloc.hardline().append(alloc.hardline());
        let mut parts = vec![lines(PRELUDE, alloc)];
        parts.extend(unions.iter().map(|u| u.print(cfg, alloc)));
        parts.extend(defs.iter().map(|d| d.print(cfg, alloc)));
        alloc.intersperse(parts, sep).append(alloc.hardline())
    }
}

impl Print for ir::UnionDef {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let ir::UnionDef { name, union, cases, ctors } = self;

        let case_entries = cases.iter().map(|case| {
            let types = comma_list(case.types.iter().map(|t| js_string(t)));
            alloc.text(format!(
                "{{ tag: {}, arity: {}, types: [{}] }},",
                js_string(&case.tag),
                case.arity,
                types
            ))
        });
        let cases_doc = alloc
            .text("cases: [")
            .append(
                alloc
                    .concat(case_entries.map(|entry| alloc.hardline().append(entry)))
                    .nest(cfg.indent),
            )
            .append(alloc.hardline())
            .append("],");

        let mut body = cases_doc.append(alloc.hardline()).append(lines(UNION_METHODS, alloc));
        for ctor in ctors {
            body = body.append(alloc.hardline()).append(ctor.print_in_union(union, alloc));
        }
        let body = alloc
            .text(format!("union: {},", js_string(union)))
            .append(alloc.hardline())
            .append(body);

        alloc
            .text(format!("export const {name} = {{"))
            .append(alloc.hardline().append(body).nest(cfg.indent))
            .append(alloc.hardline())
            .append("};")
    }
}

impl ir::CtorDef {
    fn print_in_union<'a>(&'a self, union: &str, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let ir::CtorDef { name, tag, params } = self;
        let params = comma_list(params.iter().map(ToString::to_string));
        let ret = format!(
            "return {{ union: {}, tag: {}, args: [{params}] }};",
            js_string(union),
            js_string(tag)
        );
        alloc
            .text(format!("{name}({params}) {{"))
            .append(alloc.hardline().append(alloc.text(ret)).nest(JS_INDENT))
            .append(alloc.hardline())
            .append("},")
    }
}

impl Print for ir::FnDef {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let ir::FnDef { name, params, body } = self;
        let params = comma_list(params.iter().map(ToString::to_string));
        let ret = alloc.text("return ").append(body.print(cfg, alloc)).append(";");
        alloc
            .text(format!("export function {name}({params}) {{"))
            .append(alloc.hardline().append(ret).nest(cfg.indent))
            .append(alloc.hardline())
            .append("}")
    }
}

impl Print for ir::Exp {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        match self {
            ir::Exp::Var(name) => alloc.text(name.as_str()),
            ir::Exp::TagLit(tag) => alloc.text(js_string(tag)),
            ir::Exp::Num(val) => alloc.text(val.to_string()),
            ir::Exp::Str(val) => alloc.text(js_string(val)),
            ir::Exp::Array(elems) => alloc
                .intersperse(elems.iter().map(|e| e.print(cfg, alloc)), alloc.text(", "))
                .brackets(),
            ir::Exp::Call(call) => alloc.text(call.callee.as_str()).append(
                alloc
                    .intersperse(call.args.iter().map(|a| a.print(cfg, alloc)), alloc.text(", "))
                    .parens(),
            ),
            ir::Exp::MethodCall(call) => alloc
                .text(format!("{}.{}", call.object, call.method))
                .append(
                    alloc
                        .intersperse(
                            call.args.iter().map(|a| a.print(cfg, alloc)),
                            alloc.text(", "),
                        )
                        .parens(),
                ),
            ir::Exp::NewTagged(tagged) => {
                let head = format!(
                    "{{ union: {}, tag: {}, args: [",
                    js_string(&tagged.union),
                    js_string(&tagged.tag)
                );
                alloc
                    .text(head)
                    .append(alloc.intersperse(
                        tagged.args.iter().map(|a| a.print(cfg, alloc)),
                        alloc.text(", "),
                    ))
                    .append("] }")
            }
            ir::Exp::Dispatch(dispatch) => dispatch.print(cfg, alloc),
        }
    }
}

impl Print for ir::DispatchExp {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let ir::DispatchExp { union, scrutinee, arms } = self;

        let mismatch = format!("not a tagged value of union {union}");
        let structural_guard = alloc
            .text(format!("if (!__isTagged(__scrut, {})) {{", js_string(union)))
            .append(
                alloc
                    .hardline()
                    .append(alloc.text(format!(
                        "throw new StructuralMismatchError({});",
                        js_string(&mismatch)
                    )))
                    .nest(cfg.indent),
            )
            .append(alloc.hardline())
            .append("}");

        let mut body = structural_guard;
        for arm in arms {
            body = body.append(alloc.hardline()).append(arm.print(cfg, alloc));
        }
        let body =
            body.append(alloc.hardline()).append("throw new Error(\"no clause matched: \" + __scrut.tag);");

        alloc
            .text("((__scrut) => {")
            .append(alloc.hardline().append(body).nest(cfg.indent))
            .append(alloc.hardline())
            .append("})")
            .append(scrutinee.print(cfg, alloc).parens())
    }
}

impl Print for ir::Arm {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let ir::Arm { pattern, guard, body } = self;

        let ret = alloc.text("return ").append(body.print(cfg, alloc)).append(";");
        let ret = match guard {
            // A failing guard falls through to the next arm.
            Some(guard) => alloc
                .text("if (")
                .append(guard.print(cfg, alloc))
                .append(") {")
                .append(alloc.hardline().append(ret).nest(cfg.indent))
                .append(alloc.hardline())
                .append("}"),
            None => ret,
        };

        match pattern {
            None => ret,
            Some(ir::ArmPattern { tag, binders }) => {
                let cond = format!(
                    "if (__scrut.tag === {} && __scrut.args.length === {}) {{",
                    js_string(tag),
                    binders.len()
                );
                let mut inner = alloc.nil();
                for (i, binder) in binders.iter().enumerate() {
                    if let Some(name) = binder {
                        inner = inner
                            .append(alloc.text(format!("const {name} = __scrut.args[{i}];")))
                            .append(alloc.hardline());
                    }
                }
                alloc
                    .text(cond)
                    .append(alloc.hardline().append(inner.append(ret)).nest(cfg.indent))
                    .append(alloc.hardline())
                    .append("}")
            }
        }
    }
}
