use std::collections::HashMap;

use regex::Regex;

use crate::FixtureResult;

static RE_SUB: once_cell::sync::Lazy<Regex> =
    once_cell::sync::Lazy::new(|| Regex::new(r#"#\{([A-Za-z_][A-Za-z0-9_]*)}"#).unwrap());

pub fn expand(src: &str, subs: &HashMap<&str, &str>) -> FixtureResult<String> {
    // The estimate of final size is the sum of the size of all the input.
    let sub_size = subs.iter().map(|(_, v)| v.len()).sum::<usize>();
    let est_size = src.len() + sub_size;

    let mut anchor = 0;
    let mut result = String::with_capacity(est_size);

    for m in RE_SUB.captures_iter(src) {
        let whole = m.get(0).expect("group 0 always matches");
        result.push_str(&src[anchor..whole.start()]);
        anchor = whole.end();

        let sub_name = &m[1];
        match subs.get(sub_name) {
            Some(s) => result.push_str(s),
            None => {
                anyhow::bail!("substitution `{sub_name}` in template is unknown")
            }
        }
    }
    result.push_str(&src[anchor..]);
    Ok(result)
}

/// Shell driver that checks every exported case against a compiler.
///
/// `#{compiler}` is the command turning a snippet into assembly, `#{cases}` the `assert` lines.
pub const SCRIPT_TEMPLATE: &str = r#"#!/bin/bash
assert() {
  expected="$1"
  input="$2"

  #{compiler} "$input" > tmp.s
  cc -o tmp tmp.s
  ./tmp
  actual="$?"

  if [ "$actual" = "$expected" ]; then
    echo "$input => $actual"
  else
    echo "$input => $expected expected, but got $actual"
    exit 1
  fi
}

# --- This is generated test ---

#{cases}

# --- end of testcases ---

echo OK
"#;
