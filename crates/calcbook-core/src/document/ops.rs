use super::Document;
use crate::store::{EntryContent, ResultEntry, Visibility};
use calcbook_engine::engine::{
    BinaryOp, EvalError, Expr, LineKind, Value, classify, collect_by_variable, evaluate_text,
    is_solver_call, normalize, parse, parse_solve_call, parse_system, resolve_references,
};

impl Document {
    /// Evaluate one line against the current store and write the entry.
    /// An empty or comment-only line removes any stale entry instead.
    ///
    /// The line may reference any other stored entry, including ones
    /// below it: outside a full document pass the store persists across
    /// edits, and only the line itself is off limits.
    pub fn evaluate_line(&mut self, line_number: usize, raw_text: &str) -> Option<&ResultEntry> {
        let normalized = normalize(raw_text);
        self.modified = true;
        if normalized.is_empty() {
            self.store.remove(line_number);
            return None;
        }
        let entry = self.entry_for(line_number, normalized, Visibility::Except(line_number));
        self.store.insert(entry);
        self.store.get(line_number)
    }

    /// Clear the store and evaluate every line in document order, one
    /// pass. Each line observes only entries written by strictly
    /// earlier lines; forward references fail.
    pub fn evaluate_document(&mut self, lines: &[String]) -> Vec<Option<ResultEntry>> {
        self.store.clear();
        self.modified = true;
        let mut results = Vec::with_capacity(lines.len());
        for (idx, raw) in lines.iter().enumerate() {
            let line_number = idx + 1;
            let normalized = normalize(raw);
            if normalized.is_empty() {
                results.push(None);
                continue;
            }
            let entry = self.entry_for(line_number, normalized, Visibility::Before(line_number));
            self.store.insert(entry.clone());
            results.push(Some(entry));
        }
        results
    }

    /// Read contract shared by `@` resolution and external display:
    /// the numeric value at the given address, or `None`.
    pub fn get(
        &self,
        line_number: usize,
        solution: Option<usize>,
        variable: Option<usize>,
    ) -> Option<Value> {
        self.store.get(line_number)?.numeric_result(solution, variable)
    }

    /// Renumbering hook for line insertion.
    pub fn on_lines_inserted(&mut self, position: usize, count: usize) {
        self.store.shift_for_insert(position, count);
        self.modified = true;
    }

    /// Renumbering hook for line deletion.
    pub fn on_lines_deleted(&mut self, position: usize, count: usize) {
        self.store.shift_for_delete(position, count);
        self.modified = true;
    }

    /// Build the entry for normalized line text. Every evaluator error
    /// is converted here; nothing propagates out of a line.
    fn entry_for(
        &self,
        line_number: usize,
        normalized: String,
        visibility: Visibility,
    ) -> ResultEntry {
        let view = self.store.view(visibility);
        let resolved = match resolve_references(&normalized, &view) {
            Ok(text) => text,
            Err(err) => {
                let kind = classify(&normalized);
                return ResultEntry {
                    line_number,
                    source_expression: normalized,
                    is_equation: matches!(kind, LineKind::Equation | LineKind::EquationSystem),
                    content: EntryContent::Error(err.to_string()),
                };
            }
        };

        let kind = classify(&resolved);
        let outcome = match kind {
            LineKind::Empty | LineKind::Numeric => {
                evaluate_text(&resolved).map(EntryContent::Value)
            }
            LineKind::Equation => self.solve_equation(&resolved),
            LineKind::EquationSystem => self.solve_system_line(&resolved),
        };
        ResultEntry {
            line_number,
            source_expression: normalized,
            is_equation: matches!(kind, LineKind::Equation | LineKind::EquationSystem),
            content: outcome.unwrap_or_else(|err| EntryContent::Error(err.to_string())),
        }
    }

    /// Solve a single-equation line: either a literal `solve(expr, var)`
    /// call, or `lhs = rhs` rearranged to a residual and solved for its
    /// first free variable.
    fn solve_equation(&self, resolved: &str) -> Result<EntryContent, EvalError> {
        let backend = self.solver.as_deref().ok_or(EvalError::Capability)?;
        let (residual, variable) = if is_solver_call(resolved) {
            let (expr_text, variable) = parse_solve_call(resolved)?;
            (parse(&expr_text)?, variable)
        } else {
            let (lhs, rhs) = resolved.split_once('=').ok_or_else(|| {
                EvalError::Unsupported(format!("unrecognized equation: {}", resolved))
            })?;
            if rhs.contains('=') {
                return Err(EvalError::Unsupported(
                    "equation contains more than one '='".to_string(),
                ));
            }
            let residual = Expr::binary(BinaryOp::Sub, parse(lhs)?, parse(rhs)?);
            let variable = residual
                .free_variables()
                .into_iter()
                .next()
                .unwrap_or_else(|| "x".to_string());
            (residual, variable)
        };
        let values = backend.solve_single(&residual, &variable)?;
        Ok(EntryContent::Solutions { variable, values })
    }

    /// Solve an equation-system line `x,y:x+y=5,x-y=1`.
    fn solve_system_line(&self, resolved: &str) -> Result<EntryContent, EvalError> {
        let backend = self.solver.as_deref().ok_or(EvalError::Capability)?;
        let (variables, equation_texts) = parse_system(resolved)?;
        let equations = equation_texts
            .iter()
            .map(|(lhs, rhs)| Ok((parse(lhs)?, parse(rhs)?)))
            .collect::<Result<Vec<_>, EvalError>>()?;
        let outcome = backend.solve_system(&variables, &equations)?;
        Ok(EntryContent::System(collect_by_variable(&variables, &outcome)))
    }
}
