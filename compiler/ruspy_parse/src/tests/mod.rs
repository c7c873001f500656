//! Parser tests.
//!
//! - `expr`: precedence, associativity and expression forms
//! - `stmt`: sequences, blocks and module items
//! - `recovery`: error codes and resynchronisation

#![allow(clippy::unwrap_used, clippy::expect_used)]


use ruspy_ir::{ExprArena, ExprId, ExprKind, StringInterner};

use crate::{parse_expression, parse_module, ModuleOutput, ParseOutput};

pub(super) fn parse_script(source: &str) -> (ParseOutput, StringInterner) {
    let interner = StringInterner::new();
    let tokens = ruspy_lexer::lex(source, &interner);
    let output = parse_expression(&tokens, &interner);
    (output, interner)
}

pub(super) fn parse_file(source: &str) -> (ModuleOutput, StringInterner) {
    let interner = StringInterner::new();
    let tokens = ruspy_lexer::lex(source, &interner);
    let output = parse_module(&tokens, &interner);
    (output, interner)
}

/// Parse a script that must be error-free and render it as an s-expression.
pub(super) fn sexpr(source: &str) -> String {
    let (output, interner) = parse_script(source);
    assert!(
        !output.has_errors(),
        "unexpected errors for {source:?}: {:?}",
        output.errors
    );
    render(&output.arena, &interner, output.root)
}

/// Compact tree rendering used to assert on shapes.
pub(super) fn render(arena: &ExprArena, interner: &StringInterner, id: ExprId) -> String {
    if !id.is_valid() {
        return "_".to_string();
    }
    let r = |id| render(arena, interner, id);
    let list = |ids: &[ExprId]| ids.iter().map(|&id| r(id)).collect::<Vec<_>>().join(" ");

    match arena.get_expr(id).kind {
        ExprKind::Int(n) => n.to_string(),
        ExprKind::Float(bits) => format!("{:?}", f64::from_bits(bits)),
        ExprKind::Bool(b) => b.to_string(),
        ExprKind::Str(name) => format!("{:?}", interner.lookup(name)),
        ExprKind::Null => "null".to_string(),
        ExprKind::Ident(name) => interner.lookup(name).to_string(),
        ExprKind::Let { name, init } => format!("(let {} {})", interner.lookup(name), r(init)),
        ExprKind::Assign { name, value } => format!("(= {} {})", interner.lookup(name), r(value)),
        ExprKind::AssignOp { name, op, value } => {
            format!("({}= {} {})", op.as_symbol(), interner.lookup(name), r(value))
        }
        ExprKind::Binary { op, left, right } => {
            format!("({} {} {})", op.as_symbol(), r(left), r(right))
        }
        ExprKind::Unary { op, operand } => format!("({} {})", op.as_symbol(), r(operand)),
        ExprKind::Cast { expr, target } => format!("(as {} {})", r(expr), interner.lookup(target)),
        ExprKind::Call { func, args } => {
            let args = list(arena.get_expr_list(args));
            if args.is_empty() {
                format!("(call {})", r(func))
            } else {
                format!("(call {} {args})", r(func))
            }
        }
        ExprKind::If {
            cond,
            then_branch,
            else_branch,
        } => format!("(if {} {} {})", r(cond), r(then_branch), r(else_branch)),
        ExprKind::For {
            binding,
            iter,
            body,
        } => format!("(for {} {} {})", interner.lookup(binding), r(iter), r(body)),
        ExprKind::While { cond, body } => format!("(while {} {})", r(cond), r(body)),
        ExprKind::Lambda { params, body } => {
            let names: Vec<&str> = arena
                .get_params(params)
                .iter()
                .map(|p| interner.lookup(p.name))
                .collect();
            format!("(|{}| {})", names.join(" "), r(body))
        }
        ExprKind::FnDecl { name, params, body } => {
            let names: Vec<&str> = arena
                .get_params(params)
                .iter()
                .map(|p| interner.lookup(p.name))
                .collect();
            format!("(fn {} ({}) {})", interner.lookup(name), names.join(" "), r(body))
        }
        ExprKind::Range {
            start,
            end,
            inclusive,
        } => format!("({} {} {})", if inclusive { "..=" } else { ".." }, r(start), r(end)),
        ExprKind::Block { stmts, result } => {
            let stmts = list(arena.get_expr_list(stmts));
            if stmts.is_empty() {
                format!("{{{}}}", r(result))
            } else {
                format!("{{{stmts}; {}}}", r(result))
            }
        }
        ExprKind::Return(value) => format!("(return {})", r(value)),
        ExprKind::Break => "break".to_string(),
        ExprKind::Continue => "continue".to_string(),
        ExprKind::Error => "<error>".to_string(),
    }
}
