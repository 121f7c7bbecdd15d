use crate::types::column::NumericColumn;
use crate::types::observation::Observation;
use serde::Serialize;

/// Pairwise Pearson correlation matrix over a fixed list of numeric columns.
///
/// `values[i][j]` is the correlation between `columns[i]` and `columns[j]`, computed over
/// the rows where both are present. An entry is `None` when it is undefined (fewer than two
/// complete pairs, or a constant column).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<NumericColumn>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    pub fn size(&self) -> usize {
        self.columns.len()
    }

    pub fn get(&self, a: NumericColumn, b: NumericColumn) -> Option<f64> {
        let i = self.columns.iter().position(|c| *c == a)?;
        let j = self.columns.iter().position(|c| *c == b)?;
        self.values[i][j]
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.size()).all(|i| (0..self.size()).all(|j| self.values[i][j] == self.values[j][i]))
    }
}

/// Computes the correlation matrix of `columns` over `rows`.
///
/// The diagonal is exactly `1.0` for every column with at least two present values.
pub fn correlation_matrix(rows: &[&Observation], columns: &[NumericColumn]) -> CorrelationMatrix {
    let n = columns.len();
    let mut values = vec![vec![None; n]; n];

    for i in 0..n {
        let present = rows
            .iter()
            .filter(|r| r.value(columns[i]).is_some())
            .count();
        values[i][i] = (present >= 2).then_some(1.0);

        for j in (i + 1)..n {
            let pairs: Vec<(f64, f64)> = rows
                .iter()
                .filter_map(|r| Some((r.value(columns[i])?, r.value(columns[j])?)))
                .collect();
            let r = pearson(&pairs);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    CorrelationMatrix {
        columns: columns.to_vec(),
        values,
    }
}

fn pearson(pairs: &[(f64, f64)]) -> Option<f64> {
    if pairs.len() < 2 {
        return None;
    }
    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / n;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denominator = (var_x * var_y).sqrt();
    if denominator == 0.0 || !denominator.is_finite() {
        return None;
    }
    Some((cov / denominator).clamp(-1.0, 1.0))
}
