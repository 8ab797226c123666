use crate::ast::Expr;

/// Renders a syntax tree as a box-drawing diagram.
///
/// Each node prints on its own line behind a connector: `└── ` when the
/// node is the last sibling at its level (the root always is), `├── `
/// otherwise. Operator nodes print their symbol and recurse into the left
/// child before the right one; below a last sibling the running prefix
/// grows by four spaces, below any other by `│   `, so the vertical rails
/// line up. Constant leaves print their integer value.
///
/// The traversal is pure string building with no side effects, and the
/// output carries no trailing newline.
///
/// # Example
/// ```
/// use prefixa::{
///     ast::{BinaryOperator, Expr},
///     interpreter::printer::render,
/// };
///
/// let expr = Expr::BinaryOp { op:       BinaryOperator::Add,
///                             left:     Box::new(Expr::Constant { value:    3,
///                                                                 position: 1, }),
///                             right:    Box::new(Expr::Constant { value:    4,
///                                                                 position: 5, }),
///                             position: 0, };
///
/// assert_eq!(render(&expr), "└── +\n    ├── 3\n    └── 4");
/// ```
#[must_use]
pub fn render(expr: &Expr) -> String {
    let mut lines = Vec::new();
    render_node(expr, "", true, &mut lines);
    lines.join("\n")
}

/// Renders one node and its subtree into `lines`.
fn render_node(expr: &Expr, prefix: &str, is_last: bool, lines: &mut Vec<String>) {
    let connector = if is_last { "└── " } else { "├── " };

    match expr {
        Expr::Constant { value, .. } => {
            lines.push(format!("{prefix}{connector}{value}"));
        },

        Expr::BinaryOp { op, left, right, .. } => {
            lines.push(format!("{prefix}{connector}{op}"));

            let extension = if is_last { "    " } else { "│   " };
            let child_prefix = format!("{prefix}{extension}");

            render_node(left, &child_prefix, false, lines);
            render_node(right, &child_prefix, true, lines);
        },
    }
}
