//! Spacing, identifiers, keywords, literals and operator terminals.

use javap_peg::expr::{any, any_of, eoi, java_letter, java_letter_or_digit, not, opt, plus, r, range, star};
use javap_peg::{Expr, GrammarBuilder, choice, seq};

/// Reserved words. Where one word prefixes another, the longer comes first.
const KEYWORDS: &[&str] = &[
    "assert",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "else",
    "enum",
    "extends",
    "finally",
    "final",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "interface",
    "instanceof",
    "new",
    "package",
    "return",
    "static",
    "super",
    "switch",
    "synchronized",
    "this",
    "throws",
    "throw",
    "try",
    "void",
    "while",
];

/// `(rule, text, must-not-follow set)`
const OPERATORS: &[(&str, &str, Option<&str>)] = &[
    ("AT", "@", None),
    ("AND", "&", Some("=&")),
    ("ANDAND", "&&", None),
    ("ANDEQU", "&=", None),
    ("BANG", "!", Some("=")),
    ("BSR", ">>>", Some("=")),
    ("BSREQU", ">>>=", None),
    ("COLON", ":", None),
    ("COMMA", ",", None),
    ("DEC", "--", None),
    ("DIV", "/", Some("=")),
    ("DIVEQU", "/=", None),
    ("DOT", ".", None),
    ("ELLIPSIS", "...", None),
    ("EQU", "=", Some("=")),
    ("EQUAL", "==", None),
    ("GE", ">=", None),
    ("GT", ">", Some("=>")),
    ("HAT", "^", Some("=")),
    ("HATEQU", "^=", None),
    ("INC", "++", None),
    ("LBRK", "[", None),
    ("LE", "<=", None),
    ("LPAR", "(", None),
    ("LPOINT", "<", None),
    ("LT", "<", Some("=<")),
    ("LWING", "{", None),
    ("MINUS", "-", Some("=-")),
    ("MINUSEQU", "-=", None),
    ("MOD", "%", Some("=")),
    ("MODEQU", "%=", None),
    ("NOTEQUAL", "!=", None),
    ("OR", "|", Some("=|")),
    ("OREQU", "|=", None),
    ("OROR", "||", None),
    ("PLUS", "+", Some("=+")),
    ("PLUSEQU", "+=", None),
    ("QUERY", "?", None),
    ("RBRK", "]", None),
    ("RPAR", ")", None),
    ("RPOINT", ">", None),
    ("RWING", "}", None),
    ("SEMI", ";", None),
    ("SL", "<<", Some("=")),
    ("SLEQU", "<<=", None),
    ("SR", ">>", Some("=>")),
    ("SREQU", ">>=", None),
    ("STAR", "*", Some("=")),
    ("STAREQU", "*=", None),
    ("TILDA", "~", None),
];

/// Ordered choice over literal words.
pub(super) fn words(words: &[&str]) -> Expr {
    Expr::Choice(words.iter().map(|&w| Expr::from(w)).collect())
}

pub(super) fn digit() -> Expr {
    range('0', '9')
}

pub(super) fn hex_digit() -> Expr {
    choice![range('a', 'f'), range('A', 'F'), range('0', '9')]
}

/// `word` as a whole word: not followed by an identifier character.
pub(super) fn word(word: &str) -> Expr {
    seq![word, not(r("LetterOrDigit"))]
}

pub(super) fn define(b: &mut GrammarBuilder) {
    spacing(b);
    identifiers(b);
    keywords(b);
    literals(b);
    operators(b);
}

fn spacing(b: &mut GrammarBuilder) {
    b.rule(
        "Spacing",
        star(choice![
            plus(any_of(" \t\r\n\u{c}")),
            seq!["/*", star(seq![not("*/"), any()]), "*/"],
            seq![
                "//",
                star(seq![not(any_of("\r\n")), any()]),
                choice!["\r\n", '\r', '\n', eoi()]
            ],
        ]),
    )
    .suppress_node();
}

fn identifiers(b: &mut GrammarBuilder) {
    b.rule(
        "Identifier",
        seq![
            not(r("Keyword")),
            r("Letter"),
            star(r("LetterOrDigit")),
            r("Spacing")
        ],
    )
    .suppress_subnodes()
    .memo_mismatches();
    b.rule("Letter", choice![seq!['\\', r("UnicodeEscape")], java_letter()]);
    b.rule(
        "LetterOrDigit",
        choice![seq!['\\', r("UnicodeEscape")], java_letter_or_digit()],
    )
    .memo_mismatches();
}

fn keywords(b: &mut GrammarBuilder) {
    b.rule("Keyword", seq![words(KEYWORDS), not(r("LetterOrDigit"))])
        .memo_mismatches();

    // `const` and `goto` are reserved but never used.
    for &kw in KEYWORDS.iter().filter(|&&kw| kw != "const" && kw != "goto") {
        b.rule(&kw.to_ascii_uppercase(), seq![word(kw), r("Spacing")])
            .suppress_node()
            .label(format!("'{kw}'"));
    }
}

fn literals(b: &mut GrammarBuilder) {
    let float_suffix = || opt(any_of("fFdD"));

    b.rule(
        "Literal",
        seq![
            choice![
                r("FloatLiteral"),
                r("IntegerLiteral"),
                r("CharLiteral"),
                r("StringLiteral"),
                word("true"),
                word("false"),
                word("null"),
            ],
            r("Spacing")
        ],
    );
    b.rule(
        "IntegerLiteral",
        seq![
            choice![r("HexNumeral"), r("OctalNumeral"), r("DecimalNumeral")],
            opt(any_of("lL"))
        ],
    )
    .suppress_subnodes();
    b.rule(
        "DecimalNumeral",
        choice!['0', seq![range('1', '9'), star(digit())]],
    )
    .suppress_subnodes();
    b.rule("HexNumeral", seq!['0', any_of("xX"), plus(hex_digit())])
        .suppress_subnodes()
        .memo_mismatches();
    b.rule("OctalNumeral", seq!['0', plus(range('0', '7'))])
        .suppress_subnodes();

    b.rule("FloatLiteral", choice![r("HexFloat"), r("DecimalFloat")]);
    b.rule(
        "DecimalFloat",
        choice![
            seq![
                plus(digit()),
                '.',
                star(digit()),
                opt(r("Exponent")),
                float_suffix()
            ],
            seq!['.', plus(digit()), opt(r("Exponent")), float_suffix()],
            seq![plus(digit()), r("Exponent"), float_suffix()],
            seq![plus(digit()), opt(r("Exponent")), any_of("fFdD")],
        ],
    )
    .suppress_subnodes();
    b.rule(
        "Exponent",
        seq![any_of("eE"), opt(any_of("+-")), plus(digit())],
    );
    b.rule(
        "HexFloat",
        seq![r("HexSignificant"), r("BinaryExponent"), float_suffix()],
    )
    .suppress_subnodes();
    b.rule(
        "HexSignificant",
        choice![
            seq![
                choice!["0x", "0X"],
                star(hex_digit()),
                '.',
                plus(hex_digit())
            ],
            seq![r("HexNumeral"), opt('.')],
        ],
    );
    b.rule(
        "BinaryExponent",
        seq![any_of("pP"), opt(any_of("+-")), plus(digit())],
    );

    b.rule(
        "CharLiteral",
        seq![
            '\'',
            choice![r("Escape"), seq![not(any_of("'\\")), any()]],
            '\''
        ],
    )
    .suppress_subnodes();
    b.rule(
        "StringLiteral",
        seq![
            '"',
            star(choice![r("Escape"), seq![not(any_of("\r\n\"\\")), any()]]),
            '"'
        ],
    )
    .suppress_subnodes();
    b.rule(
        "Escape",
        seq![
            '\\',
            choice![
                any_of("btnfr\"'\\"),
                r("OctalEscape"),
                r("UnicodeEscape")
            ]
        ],
    );
    b.rule(
        "OctalEscape",
        choice![
            seq![range('0', '3'), range('0', '7'), range('0', '7')],
            seq![range('0', '7'), range('0', '7')],
            range('0', '7'),
        ],
    );
    b.rule(
        "UnicodeEscape",
        seq![
            plus('u'),
            hex_digit(),
            hex_digit(),
            hex_digit(),
            hex_digit()
        ],
    );
}

fn operators(b: &mut GrammarBuilder) {
    for &(name, text, guard) in OPERATORS {
        let body = match guard {
            Some(set) => seq![text, not(any_of(set)), r("Spacing")],
            None => seq![text, r("Spacing")],
        };
        b.rule(name, body).suppress_node().label(format!("'{text}'"));
    }
}
