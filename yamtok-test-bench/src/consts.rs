pub const BLOCK1_INPUT: &str = r"
- x
- y
";
pub const BLOCK2_INPUT: &str = r"
    - x
    - y
";
pub const BLOCK_EVENTS: &str = r"
+DOC
+SEQ
?ENT
=TXT x
?ENT
=TXT y
-SEQ
-DOC
-STR";

pub const NESTED_MAP_INPUT: &str = r"
a:
  b: 1
  c: 2.5
d: true
";
pub const NESTED_MAP_EVENTS: &str = r"
+DOC
+MAP
?KEY
=TXT a
+MAP
?KEY
=TXT b
=INT 1
?KEY
=TXT c
=DEC 2.5
-MAP
?KEY
=TXT d
=TXT true
-MAP
-DOC
-STR";

pub const DEEP_DEDENT_INPUT: &str = r"
a:
  b:
    c: 1
d: 2
";
pub const DEEP_DEDENT_EVENTS: &str = r"
+DOC
+MAP
?KEY
=TXT a
+MAP
?KEY
=TXT b
+MAP
?KEY
=TXT c
=INT 1
-MAP
-MAP
?KEY
=TXT d
=INT 2
-MAP
-DOC
-STR";

pub const UNEVEN_DEDENT_INPUT: &str = r"
a:
    b: 1
  c: 2
";
pub const UNEVEN_DEDENT_EVENTS: &str = r"
+DOC
+MAP
?KEY
=TXT a
+MAP
?KEY
=TXT b
=INT 1
-MAP
+MAP
?KEY
=TXT c
=INT 2
-MAP
-MAP
-DOC
-STR";

pub const SEQ_IN_MAP_INPUT: &str = r"
key:
- a
- b
other: x
";
pub const SEQ_IN_MAP_EVENTS: &str = r"
+DOC
+MAP
?KEY
=TXT key
+SEQ
?ENT
=TXT a
?ENT
=TXT b
-SEQ
?KEY
=TXT other
=TXT x
-MAP
-DOC
-STR";

pub const MAP_IN_SEQ_INPUT: &str = r"
- a: 1
  b: 2
- c
";
pub const MAP_IN_SEQ_EVENTS: &str = r"
+DOC
+SEQ
?ENT
+MAP
?KEY
=TXT a
=INT 1
?KEY
=TXT b
=INT 2
-MAP
?ENT
=TXT c
-SEQ
-DOC
-STR";

pub const SCALAR_KINDS_INPUT: &str = r"
int: -12
dec: 1e5
plus: +3
txt: twelve monkeys
";
pub const SCALAR_KINDS_EVENTS: &str = r"
+DOC
+MAP
?KEY
=TXT int
=INT -12
?KEY
=TXT dec
=DEC 1e5
?KEY
=TXT plus
=INT +3
?KEY
=TXT txt
=TXT twelve monkeys
-MAP
-DOC
-STR";

pub const COMMENTS_INPUT: &str = r"
# head
a: b   # tail
";
pub const COMMENTS_EVENTS: &str = r"
=COM head
+DOC
+MAP
?KEY
=TXT a
=TXT b
=COM tail
-MAP
-DOC
-STR";

pub const COLON_IN_PLAIN_INPUT: &str = r"
url: http://x.org/a:b
";
pub const COLON_IN_PLAIN_EVENTS: &str = r"
+DOC
+MAP
?KEY
=TXT url
=TXT http://x.org/a:b
-MAP
-DOC
-STR";

pub const PROPS_INPUT: &str = r"
- &anc !!str value
- *anc
";
pub const PROPS_EVENTS: &str = r"
+DOC
+SEQ
?ENT
=ANC anc
=TAG !str
=TXT value
?ENT
=ALI anc
-SEQ
-DOC
-STR";

pub const EXPLICIT_KEY_INPUT: &str = r"
? a
";
pub const EXPLICIT_KEY_EVENTS: &str = r"
?KEY
=TXT a
-STR";

pub const BLOCK_COMMA_INPUT: &str = r"
a, b
";
pub const BLOCK_COMMA_EVENTS: &str = r"
=TXT a, b
-STR";

pub const LITERAL_ERR_INPUT: &str = r"
a: |
  text
";
pub const LITERAL_ERR_EVENTS: &str = r"
+DOC
+MAP
?KEY
=TXT a
ERR";

pub const FOLDED_ERR_INPUT: &str = r"
- >
  text
";
pub const FOLDED_ERR_EVENTS: &str = r"
+DOC
+SEQ
?ENT
ERR";

pub const FLOW_SEQ_INPUT: &str = r"
[a, b, c]
";
pub const FLOW_SEQ2_INPUT: &str = r"
[ a ,b,
  c ]
";
pub const FLOW_SEQ_EVENTS: &str = r"
+DOC
+SEQ
=TXT a
=TXT b
=TXT c
-SEQ
-DOC
-STR";

pub const FLOW_MAP_INPUT: &str = r"
{a: 1, b: [x, y]}
";
pub const FLOW_MAP_EVENTS: &str = r"
+DOC
+MAP
?KEY
=TXT a
=INT 1
?KEY
=TXT b
+SEQ
=TXT x
=TXT y
-SEQ
-MAP
-DOC
-STR";

pub const FLOW_COLON_SEQ_INPUT: &str = r"
[a:b, c]
";
pub const FLOW_COLON_SEQ_EVENTS: &str = r"
+DOC
+SEQ
=TXT a:b
=TXT c
-SEQ
-DOC
-STR";

pub const FLOW_COLON_MAP_INPUT: &str = r"
{a:b: c}
";
pub const FLOW_COLON_MAP_EVENTS: &str = r"
+DOC
+MAP
?KEY
=TXT a:b
=TXT c
-MAP
-DOC
-STR";

pub const FLOW_IN_BLOCK_INPUT: &str = r"
key: [1, 2]
next: {x: y}
";
pub const FLOW_IN_BLOCK_EVENTS: &str = r"
+DOC
+MAP
?KEY
=TXT key
+SEQ
=INT 1
=INT 2
-SEQ
?KEY
=TXT next
+MAP
?KEY
=TXT x
=TXT y
-MAP
-MAP
-DOC
-STR";

pub const FLOW_IN_SEQ_INPUT: &str = r"
- [1]
- [2]
";
pub const FLOW_IN_SEQ_EVENTS: &str = r"
+DOC
+SEQ
?ENT
?ENT
+SEQ
=INT 1
-SEQ
?ENT
?ENT
+SEQ
=INT 2
-SEQ
-SEQ
-DOC
-STR";

pub const NESTED_FLOW_INPUT: &str = r"
[[a], {b: c}]
";
pub const NESTED_FLOW_EVENTS: &str = r"
+DOC
+SEQ
?ENT
+SEQ
=TXT a
-SEQ
?ENT
+MAP
?KEY
=TXT b
=TXT c
-MAP
-SEQ
-DOC
-STR";

pub const FLOW_CLOSE_INNER_INPUT: &str = r"
[{a: b]
";
pub const FLOW_CLOSE_INNER_EVENTS: &str = r"
+DOC
+SEQ
?ENT
+MAP
?KEY
=TXT a
=TXT b
-MAP
-SEQ
-DOC
-STR";

pub const FLOW_ERR_CLOSER_INPUT: &str = r"
[a}
";
pub const FLOW_ERR_CLOSER_EVENTS: &str = r"
+DOC
+SEQ
=TXT a
ERR";

pub const FLOW_ERR_STRAY_INPUT: &str = r"
a]
";
pub const FLOW_ERR_STRAY_EVENTS: &str = r"
=TXT a
ERR";

pub const QUOTED_KEY_INPUT: &str = r#"
"quoted key" : 'value'
"#;
pub const QUOTED_KEY_EVENTS: &str = r"
+DOC
+MAP
?KEY
=TXT quoted key
=TXT value
-MAP
-DOC
-STR";

pub const SINGLE_ESCAPE_INPUT: &str = r"
'it''s'
";
pub const SINGLE_ESCAPE_EVENTS: &str = r"
=TXT it''s
-STR";

pub const DOUBLE_ESCAPE_INPUT: &str = r#"
"say \"hi\""
"#;
pub const DOUBLE_ESCAPE_EVENTS: &str = r#"
=TXT say \"hi\"
-STR"#;

pub const QUOTED_FLOW_INPUT: &str = r#"
["a, b", 'c']
"#;
pub const QUOTED_FLOW_EVENTS: &str = r"
+DOC
+SEQ
=TXT a, b
=TXT c
-SEQ
-DOC
-STR";

pub const QUOTE_UNTERMINATED_INPUT: &str = r#"
key: "abc"#;
pub const QUOTE_NEWLINE_INPUT: &str = r#"
key: "abc
  def"
"#;
pub const QUOTE_TAB_INPUT: &str = "\nkey: \"a\tb\"\n";
pub const QUOTE_ERR_EVENTS: &str = r"
+DOC
+MAP
?KEY
=TXT key
ERR";

pub const MULTI_DOC_INPUT: &str = r"
---
a: 1
---
- x
...
";
pub const MULTI_DOC_EVENTS: &str = r"
+DOC
+MAP
?KEY
=TXT a
=INT 1
-MAP
-DOC
+DOC
+SEQ
?ENT
=TXT x
-SEQ
-DOC
-STR";

pub const EMPTY_DOC1_INPUT: &str = r"
---
";
pub const EMPTY_DOC2_INPUT: &str = r"
---
...
";
pub const EMPTY_DOC_EVENTS: &str = r"
+DOC
-DOC
-STR";

pub const EMPTY_INPUT: &str = "";
pub const BLANK_INPUT: &str = "  \n\t\n";
pub const EMPTY_EVENTS: &str = r"
-STR";

pub const FOOTER_ONLY_INPUT: &str = r"
...
";
pub const FOOTER_ONLY_EVENTS: &str = r"
-DOC
-STR";

pub const FOOTER_BETWEEN_INPUT: &str = r"
a
...
b
";
pub const FOOTER_BETWEEN_EVENTS: &str = r"
=TXT a
-DOC
=TXT b
-STR";

pub const DOC_COMMENT_INPUT: &str = r"
--- # c
";
pub const DOC_COMMENT_EVENTS: &str = r"
+DOC
=COM c
-DOC
-STR";

pub const NOT_MARKERS_INPUT: &str = r"
---a
...b
.5
";
pub const NOT_MARKERS_EVENTS: &str = r"
=TXT ---a
=TXT ...b
=DEC .5
-STR";

pub const DOC_RESTART_INPUT: &str = r"
- a
---
b: c
";
pub const DOC_RESTART_EVENTS: &str = r"
+DOC
+SEQ
?ENT
=TXT a
-SEQ
-DOC
+DOC
+MAP
?KEY
=TXT b
=TXT c
-MAP
-DOC
-STR";

pub const DIRECTIVE_ERR_INPUT: &str = r"
%YAML 1.2
---
";
pub const RESERVED_ERR_INPUT: &str = r"
@x
";
pub const BACKTICK_ERR_INPUT: &str = "\n`x\n";
pub const LEADING_ERR_EVENTS: &str = r"
ERR";
