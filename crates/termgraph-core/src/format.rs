// File: crates/termgraph-core/src/format.rs
// Summary: Caller-supplied numeric format templates (`{:<5.2f}` style) for bar tails.
// Notes:
// - Exactly one `{...}` placeholder; `{{` and `}}` are literal braces.
// - Spec grammar: [[fill]align][sign][0][width][.precision][type], type in f F e E d % or none.

use std::str::FromStr;

use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Align {
    Left,
    Right,
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    /// No type given: shortest round-trip representation.
    General,
    Fixed,
    Exponent { upper: bool },
    Integer,
    Percent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Spec {
    fill: char,
    align: Option<Align>,
    plus: bool,
    zero: bool,
    width: usize,
    precision: Option<usize>,
    kind: Kind,
}

impl Default for Spec {
    fn default() -> Self {
        Self { fill: ' ', align: None, plus: false, zero: false, width: 0, precision: None, kind: Kind::General }
    }
}

/// A parsed number format template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberFormat {
    template: String,
    prefix: String,
    suffix: String,
    spec: Spec,
}

impl NumberFormat {
    pub fn parse(template: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidFormat {
            template: template.to_string(),
            reason: reason.to_string(),
        };

        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut spec: Option<Spec> = None;
        let mut chars = template.chars().peekable();
        while let Some(c) = chars.next() {
            let literal = if spec.is_some() { &mut suffix } else { &mut prefix };
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '}' => return Err(invalid("unmatched `}`")),
                '{' => {
                    if spec.is_some() {
                        return Err(invalid("more than one placeholder"));
                    }
                    let mut body = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(ch) => body.push(ch),
                            None => return Err(invalid("unterminated placeholder")),
                        }
                    }
                    spec = Some(parse_placeholder(&body).map_err(|r| invalid(&r))?);
                }
                _ => literal.push(c),
            }
        }
        let spec = spec.ok_or_else(|| invalid("missing `{}` placeholder"))?;
        Ok(Self { template: template.to_string(), prefix, suffix, spec })
    }

    pub fn template(&self) -> &str { &self.template }

    /// Render `value` through the template.
    pub fn format(&self, value: f64) -> String {
        let s = &self.spec;
        let digits = match s.kind {
            Kind::General => match s.precision {
                Some(p) => format!("{:.*}", p, value.abs()),
                None => format!("{}", value.abs()),
            },
            Kind::Fixed => format!("{:.*}", s.precision.unwrap_or(6), value.abs()),
            Kind::Exponent { upper } => exponent(value.abs(), s.precision.unwrap_or(6), upper),
            Kind::Integer => format!("{:.0}", value.abs().round()),
            Kind::Percent => format!("{:.*}%", s.precision.unwrap_or(6), value.abs() * 100.0),
        };
        let negative = value < 0.0 && digits.bytes().any(|b| b.is_ascii_digit() && b != b'0');
        let sign = if negative {
            "-"
        } else if s.plus {
            "+"
        } else {
            ""
        };

        let len = sign.chars().count() + digits.chars().count();
        let pad = s.width.saturating_sub(len);
        let body = if s.zero && s.align.is_none() {
            format!("{sign}{}{digits}", "0".repeat(pad))
        } else {
            let fill = |n: usize| s.fill.to_string().repeat(n);
            match s.align.unwrap_or(Align::Right) {
                Align::Left => format!("{sign}{digits}{}", fill(pad)),
                Align::Right => format!("{}{sign}{digits}", fill(pad)),
                Align::Center => format!("{}{sign}{digits}{}", fill(pad / 2), fill(pad - pad / 2)),
            }
        };
        format!("{}{}{}", self.prefix, body, self.suffix)
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            template: crate::types::FORMAT.to_string(),
            prefix: String::new(),
            suffix: String::new(),
            spec: Spec {
                align: Some(Align::Left),
                width: 5,
                precision: Some(2),
                kind: Kind::Fixed,
                ..Spec::default()
            },
        }
    }
}

impl FromStr for NumberFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_placeholder(body: &str) -> Result<Spec, String> {
    let spec = match body.split_once(':') {
        None if body.is_empty() || body == "0" => return Ok(Spec::default()),
        None => return Err(format!("unsupported field `{body}`")),
        Some((field, spec)) if field.is_empty() || field == "0" => spec,
        Some((field, _)) => return Err(format!("unsupported field `{field}`")),
    };

    let chars: Vec<char> = spec.chars().collect();
    let mut out = Spec::default();
    let mut i = 0;

    let align_of = |c: char| match c {
        '<' => Some(Align::Left),
        '>' => Some(Align::Right),
        '^' => Some(Align::Center),
        _ => None,
    };
    if let Some(a) = chars.get(1).copied().and_then(align_of) {
        out.fill = chars[0];
        out.align = Some(a);
        i = 2;
    } else if let Some(a) = chars.first().copied().and_then(align_of) {
        out.align = Some(a);
        i = 1;
    }

    match chars.get(i) {
        Some('+') => {
            out.plus = true;
            i += 1;
        }
        Some('-') => i += 1,
        _ => {}
    }

    if chars.get(i) == Some(&'0') {
        out.zero = true;
        i += 1;
    }

    let start = i;
    while chars.get(i).is_some_and(|c| c.is_ascii_digit()) {
        i += 1;
    }
    if i > start {
        out.width = chars[start..i].iter().collect::<String>().parse().map_err(|_| "width too large".to_string())?;
    }

    if chars.get(i) == Some(&'.') {
        i += 1;
        let start = i;
        while chars.get(i).is_some_and(|c| c.is_ascii_digit()) {
            i += 1;
        }
        if i == start {
            return Err("missing precision after `.`".to_string());
        }
        let p: usize = chars[start..i].iter().collect::<String>().parse().map_err(|_| "precision too large".to_string())?;
        out.precision = Some(p);
    }

    out.kind = match chars.get(i) {
        None => Kind::General,
        Some('f') | Some('F') => Kind::Fixed,
        Some('e') => Kind::Exponent { upper: false },
        Some('E') => Kind::Exponent { upper: true },
        Some('d') => Kind::Integer,
        Some('%') => Kind::Percent,
        Some(c) => return Err(format!("unknown format type `{c}`")),
    };
    if out.kind != Kind::General {
        i += 1;
    }
    if i != chars.len() {
        return Err(format!("unexpected `{}`", chars[i..].iter().collect::<String>()));
    }
    Ok(out)
}

/// `1.50e+02` style exponent with at least two digits, as printf writes it.
fn exponent(v: f64, precision: usize, upper: bool) -> String {
    let raw = format!("{:.*e}", precision, v);
    let (mantissa, exp) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let sign = if exp < 0 { '-' } else { '+' };
    let e = if upper { 'E' } else { 'e' };
    format!("{mantissa}{e}{sign}{:02}", exp.abs())
}
