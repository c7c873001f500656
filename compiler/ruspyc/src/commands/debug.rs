//! Debug commands: `lex` and `parse` for inspecting the front end.

use ruspy_ir::StringInterner;

use super::{read_file, CliError, CliOptions};

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) -> Result<(), CliError> {
    let source = read_file(path)?;
    let interner = StringInterner::new();
    let lexed = ruspy_lexer::lex_with_errors(&source, &interner);

    println!("Tokens for '{}' ({} tokens):", path, lexed.tokens.len());
    for token in lexed.tokens.iter() {
        println!("  {token:?}");
    }
    if lexed.has_errors() {
        println!();
        println!("Errors:");
        for error in &lexed.errors {
            println!("  {}: {}", error.span, error.message(&source));
        }
    }
    Ok(())
}

/// Parse a file and display what the parser produced. With `--script` the
/// file is parsed as a script instead of a module.
pub fn parse_file(path: &str, options: &CliOptions) -> Result<(), CliError> {
    let source = read_file(path)?;
    let interner = StringInterner::new();
    let tokens = ruspy_lexer::lex(&source, &interner);

    if options.script {
        let parsed = ruspy_parse::parse_expression(&tokens, &interner);
        println!("Parse result for '{path}' (script):");
        println!("  Expressions: {}", parsed.arena.expr_count());
        println!("  Errors: {}", parsed.errors.len());
        if let Some(root) = parsed.arena.try_get_expr(parsed.root) {
            println!("  Root: {root:?}");
        }
        print_errors(&parsed.errors);
        return Ok(());
    }

    let parsed = ruspy_parse::parse_module(&tokens, &interner);
    println!("Parse result for '{path}':");
    println!("  Functions: {}", parsed.module.functions.len());
    println!("  Expressions: {}", parsed.arena.expr_count());
    println!("  Errors: {}", parsed.errors.len());

    if !parsed.module.functions.is_empty() {
        println!();
        println!("Functions:");
        for func in &parsed.module.functions {
            let params: Vec<_> = parsed
                .arena
                .get_params(func.params)
                .iter()
                .map(|p| interner.lookup(p.name))
                .collect();
            println!("  fn {}({})", interner.lookup(func.name), params.join(", "));
        }
    }
    print_errors(&parsed.errors);
    Ok(())
}

fn print_errors(errors: &[ruspy_parse::ParseError]) {
    if errors.is_empty() {
        return;
    }
    println!();
    println!("Errors:");
    for error in errors {
        println!("  {}: {}", error.span, error);
    }
}
