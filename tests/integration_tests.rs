use tbjs::analyzer::{SemanticError, SemanticVisitor};
use tbjs::codegen::Codegen;
use tbjs::lexer::{Lexer, TokenKind};
use tbjs::optimizer::optimize;
use tbjs::parser::{BinOpKind, Expr, ParseErrorKind, Parser, Program, Stmt};
use tbjs::{compile, CompileError};

fn parse(input: &str) -> Program {
    let tokens = Lexer::tokenize(input).unwrap();
    let mut parser = Parser::new(tokens);
    parser.parse().unwrap()
}

fn generate(input: &str) -> String {
    Codegen::new().generate(&parse(input))
}

fn int(value: i64) -> Box<Expr> {
    Box::new(Expr::Integer(value))
}

fn binary(op: BinOpKind, left: Box<Expr>, right: Box<Expr>) -> Box<Expr> {
    Box::new(Expr::Binary(op, left, right))
}

#[test]
fn lex_let_print_token_sequence() {
    let tokens = Lexer::tokenize("LET X = 5\nPRINT X").unwrap();

    let kinds: Vec<_> = tokens.iter().map(|t| t.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Integer,
            TokenKind::Print,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
    assert_eq!(tokens[1].lexeme, "X");
    assert_eq!(tokens[3].lexeme, "5");
}

#[test]
fn lex_tracks_line_numbers() {
    let tokens = Lexer::tokenize("PRINT 1\nPRINT 2").unwrap();

    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[2].line, 2);
    assert_eq!(tokens[3].line, 2);
}

#[test]
fn lex_distinguishes_float_from_integer() {
    let tokens = Lexer::tokenize("PRINT 3.14 + 10").unwrap();

    assert_eq!(tokens[1].kind, TokenKind::Float);
    assert_eq!(tokens[1].lexeme, "3.14");
    assert_eq!(tokens[3].kind, TokenKind::Integer);
    assert_eq!(tokens[3].lexeme, "10");
}

#[test]
fn lex_double_equal_is_greedy() {
    let tokens = Lexer::tokenize("IF X == 1 THEN PRINT X").unwrap();

    assert_eq!(tokens[2].kind, TokenKind::RelOp);
    assert_eq!(tokens[2].lexeme, "==");
}

#[test]
fn lex_captures_comment_text() {
    let tokens = Lexer::tokenize("REM hello world\nEND").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Comment);
    assert_eq!(tokens[0].lexeme, "hello world");
    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[1].kind, TokenKind::End);
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn lex_rejects_unknown_character() {
    let err = Lexer::tokenize("LET X = ?").unwrap_err();

    assert_eq!(err.ch, '?');
    assert_eq!(err.position, 8);
    assert_eq!(err.line, 1);
}

#[test]
fn parse_is_deterministic() {
    let input = "LET X = 1\nIF X == 1 THEN PRINT X ELSE PRINT 0\nEND";
    assert_eq!(parse(input), parse(input));
}

#[test]
fn parse_respects_precedence_tiers() {
    let program = parse("LET A = 2 + 3 * 4");

    let expected = Stmt::Let(
        "A".to_string(),
        *binary(BinOpKind::Add, int(2), binary(BinOpKind::Mul, int(3), int(4))),
    );
    assert_eq!(program.0, vec![expected]);
}

#[test]
fn parse_parentheses_override_precedence() {
    let program = parse("LET A = (2 + 3) * 4");

    let expected = Stmt::Let(
        "A".to_string(),
        *binary(BinOpKind::Mul, binary(BinOpKind::Add, int(2), int(3)), int(4)),
    );
    assert_eq!(program.0, vec![expected]);
}

#[test]
fn parse_binary_operators_are_left_associative() {
    let program = parse("PRINT 10 - 4 - 3");

    let expected = Stmt::Print(*binary(
        BinOpKind::Sub,
        binary(BinOpKind::Sub, int(10), int(4)),
        int(3),
    ));
    assert_eq!(program.0, vec![expected]);
}

#[test]
fn parse_if_with_else_branch() {
    let program = parse("IF 1 < 2 THEN PRINT 1 ELSE PRINT 0");

    let Stmt::If(condition, then_branch, else_branch) = &program.0[0] else {
        panic!("expected an if statement, got {:?}", program.0[0]);
    };
    assert!(condition.is_comparison());
    assert_eq!(**then_branch, Stmt::Print(Expr::Integer(1)));
    assert_eq!(else_branch.as_deref(), Some(&Stmt::Print(Expr::Integer(0))));
}

#[test]
fn parse_while_body_runs_until_stop() {
    let program = parse("WHILE I < 3 DO PRINT I I = I + 1 STOP");

    let Stmt::While(_, body) = &program.0[0] else {
        panic!("expected a while statement, got {:?}", program.0[0]);
    };
    assert_eq!(body.len(), 2);
    assert_eq!(body[0], Stmt::Print(Expr::Ident("I".to_string())));
    assert!(matches!(&body[1], Stmt::Assignment(name, _) if name == "I"));
}

#[test]
fn parse_error_on_missing_then() {
    let tokens = Lexer::tokenize("IF 1 == 2 PRINT 1").unwrap();
    let err = Parser::new(tokens).parse().unwrap_err();

    assert_eq!(err.kind, ParseErrorKind::UnexpectedToken);
    assert_eq!(err.line, 1);
    assert!(err.message.contains("THEN"));
}

#[test]
fn parse_error_on_unclosed_while() {
    let tokens = Lexer::tokenize("WHILE 1 < 2 DO PRINT 1").unwrap();
    let err = Parser::new(tokens).parse().unwrap_err();

    assert_eq!(err.kind, ParseErrorKind::UnexpectedEof);
}

#[test]
fn parse_error_on_missing_expression() {
    let tokens = Lexer::tokenize("PRINT +").unwrap();
    let err = Parser::new(tokens).parse().unwrap_err();

    assert_eq!(err.kind, ParseErrorKind::UnexpectedToken);
    assert!(err.message.contains("expression"));
}

#[test]
fn parse_error_on_integer_overflow() {
    let tokens = Lexer::tokenize("PRINT 99999999999999999999").unwrap();
    let err = Parser::new(tokens).parse().unwrap_err();

    assert_eq!(err.kind, ParseErrorKind::InvalidLiteral);
}

#[test]
fn optimizer_drops_statements_after_end() {
    let program = parse("PRINT 1\nEND\nPRINT 2\nPRINT 3");
    let optimized = optimize(program);

    assert_eq!(
        optimized.0,
        vec![Stmt::Print(Expr::Integer(1)), Stmt::End]
    );
}

#[test]
fn optimizer_is_idempotent() {
    let program = parse("LET X = 1\nEND\nPRINT X");

    let once = optimize(program);
    let twice = optimize(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn optimizer_keeps_programs_without_end_intact() {
    let program = parse("LET X = 1\nPRINT X");
    let optimized = optimize(program.clone());

    assert_eq!(program, optimized);
}

#[test]
fn optimizer_ignores_end_inside_loop_body() {
    let program = parse("WHILE 1 < 2 DO END STOP\nPRINT 3");
    let optimized = optimize(program.clone());

    assert_eq!(program, optimized);
}

#[test]
fn analyze_reports_redeclaration() {
    let err = compile("LET X = 1\nLET X = 2").unwrap_err();

    assert_eq!(
        err,
        CompileError::Semantic(SemanticError::AlreadyDeclared("X".to_string()))
    );
}

#[test]
fn analyze_reports_undeclared_read() {
    let err = compile("PRINT X").unwrap_err();

    assert_eq!(
        err,
        CompileError::Semantic(SemanticError::NotDeclared("X".to_string()))
    );
}

#[test]
fn analyze_rejects_assignment_to_undeclared_variable() {
    let err = compile("X = 1").unwrap_err();

    assert_eq!(
        err,
        CompileError::Semantic(SemanticError::NotDeclared("X".to_string()))
    );
}

#[test]
fn analyze_rejects_non_comparison_condition() {
    let err = compile("IF X THEN PRINT X").unwrap_err();

    assert_eq!(
        err,
        CompileError::Semantic(SemanticError::ConditionNotComparison("IF"))
    );
}

#[test]
fn analyze_rejects_arithmetic_condition_in_while() {
    let err = compile("LET X = 1\nWHILE X + 1 DO PRINT X STOP").unwrap_err();

    assert_eq!(
        err,
        CompileError::Semantic(SemanticError::ConditionNotComparison("WHILE"))
    );
}

#[test]
fn analyze_warns_about_unused_variable() {
    let output = compile("LET X = 1").unwrap();

    assert_eq!(
        output.warnings,
        vec!["variable 'X' is declared but never used".to_string()]
    );
}

#[test]
fn analyze_collects_all_unused_variables() {
    let output = compile("LET A = 1\nLET B = 2").unwrap();

    let mut warnings = output.warnings;
    warnings.sort();
    assert_eq!(
        warnings,
        vec![
            "variable 'A' is declared but never used".to_string(),
            "variable 'B' is declared but never used".to_string(),
        ]
    );
}

#[test]
fn analyze_read_clears_unused_warning() {
    let output = compile("LET X = 1\nPRINT X").unwrap();

    assert!(output.warnings.is_empty());
}

#[test]
fn analyze_assignment_does_not_count_as_use() {
    let output = compile("LET X = 1\nX = 2").unwrap();

    assert_eq!(
        output.warnings,
        vec!["variable 'X' is declared but never used".to_string()]
    );
}

#[test]
fn analyze_let_initializer_reads_earlier_variables() {
    let output = compile("LET X = 1\nLET Y = X + 1\nPRINT Y").unwrap();

    assert!(output.warnings.is_empty());
}

#[test]
fn analyze_condition_reads_mark_variables_used() {
    let program = parse("LET I = 0\nWHILE I < 3 DO I = I + 1 STOP");

    let mut visitor = SemanticVisitor::new();
    visitor.visit_program(&program).unwrap();
    assert!(visitor.unused_variables().is_empty());
}

#[test]
fn generate_let_and_print() {
    let output = compile("LET X = 5\nPRINT X").unwrap();

    assert_eq!(output.code, "let X = 5;\nconsole.log(X);\n");
    assert!(output.warnings.is_empty());
}

#[test]
fn generate_parenthesizes_nested_binary_expressions() {
    assert_eq!(generate("PRINT 2 + 3 * 4"), "console.log(2 + (3 * 4));\n");
    assert_eq!(generate("PRINT (2 + 3) * 4"), "console.log((2 + 3) * 4);\n");
}

#[test]
fn generate_if_else_block() {
    let code = generate("LET X = 1\nIF X == 1 THEN PRINT X ELSE PRINT 0");

    assert_eq!(
        code,
        "let X = 1;\nif (X == 1) {\n\tconsole.log(X);\n} else {\n\tconsole.log(0);\n}\n"
    );
}

#[test]
fn generate_if_without_else_omits_else_block() {
    let code = generate("LET X = 1\nIF X > 0 THEN PRINT X");

    assert_eq!(code, "let X = 1;\nif (X > 0) {\n\tconsole.log(X);\n}\n");
}

#[test]
fn generate_while_loop() {
    let code = generate("LET I = 0\nWHILE I < 3 DO PRINT I I = I + 1 STOP");

    assert_eq!(
        code,
        "let I = 0;\nwhile (I < 3) {\n\tconsole.log(I);\n\tI = I + 1;\n}\n"
    );
}

#[test]
fn generate_comment_and_end() {
    let code = generate("REM greeting\nPRINT 1\nEND");

    assert_eq!(code, "// greeting\nconsole.log(1);\nprocess.exit(0);\n");
}

#[test]
fn generate_float_literal() {
    assert_eq!(generate("PRINT 3.14"), "console.log(3.14);\n");
}

#[test]
fn compile_skips_dead_code_after_end() {
    // PRINT X after END would be a semantic error, but the optimizer runs
    // before analysis and removes it.
    let output = compile("PRINT 1\nEND\nPRINT X").unwrap();

    assert_eq!(output.code, "console.log(1);\nprocess.exit(0);\n");
}

#[test]
fn compile_surfaces_lex_errors() {
    let err = compile("LET X = 5 # 2").unwrap_err();

    assert!(matches!(err, CompileError::Lex(_)));
    assert!(err.to_string().contains('#'));
}

#[test]
fn compile_surfaces_parse_errors() {
    let err = compile("LET = 5").unwrap_err();

    assert!(matches!(err, CompileError::Parse(_)));
    assert!(err.to_string().contains("identifier"));
}
