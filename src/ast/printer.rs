use crate::ast::*;

pub fn to_sexp(script: &Script) -> String {
    let mut buf = String::new();
    for op in &script.operations {
        sexp_operation(&mut buf, op);
        buf.push('\n');
    }
    buf
}

pub fn to_json(script: &Script) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(script)
}

fn sexp_operation(buf: &mut String, op: &Operation) {
    match op {
        Operation::Declare(d) => sexp_list(buf, "declare", &[d.name.as_str()]),
        Operation::Assign(a) => sexp_list(buf, "set", &[a.name.as_str(), a.value.as_str()]),
        Operation::Increment(adj) => {
            sexp_list(buf, "increment", &[adj.name.as_str(), adj.delta.as_str()]);
        }
        Operation::Decrement(adj) => {
            sexp_list(buf, "decrement", &[adj.name.as_str(), adj.delta.as_str()]);
        }
        Operation::Print(p) => sexp_list(buf, "print", &[p.name.as_str()]),
        Operation::BranchStart(b) => {
            let operator = b.operator.to_string();
            sexp_list(
                buf,
                "if",
                &[b.target.as_str(), operator.as_str(), b.comparison.as_str()],
            );
        }
        Operation::BranchEnd(_) => sexp_list(buf, "endif", &[]),
    }
}

fn sexp_list(buf: &mut String, head: &str, items: &[&str]) {
    buf.push('(');
    buf.push_str(head);
    for item in items {
        buf.push(' ');
        buf.push_str(item);
    }
    buf.push(')');
}
