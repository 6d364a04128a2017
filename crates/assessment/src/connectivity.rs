//! Graph connectivity of count and transition matrices.
//!
//! A matrix `C` is read as a directed graph on its states with an edge
//! `i -> j` wherever the stored entry `C[i, j]` is nonzero. Explicitly
//! stored zeros and self-loops do not contribute edges.

use std::collections::VecDeque;

use stochmat_matrix::{MatrixView, RowEntries};
use tracing::debug;

use crate::error::AssessmentError;
use crate::square_dim;

const UNVISITED: usize = usize::MAX;

/// Checks whether the graph of `c` is connected.
///
/// With `directed = true` this means strongly connected: every state
/// reaches every other state along directed edges. With `directed = false`
/// edges are symmetrized first and a single connected component is
/// required. An empty matrix is connected (vacuously), as is a single
/// state.
///
/// Runs in `O(N + E)`. Sparse inputs are read through their stored entries
/// only.
///
/// # Errors
///
/// Returns [`AssessmentError::NotSquare`] for non-square input.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use stochmat_assessment::is_connected;
///
/// // 0 -> 1 but no way back.
/// let c = array![[1.0, 1.0], [0.0, 1.0]];
/// assert!(!is_connected(&c, true).unwrap());
/// assert!(is_connected(&c, false).unwrap());
/// ```
pub fn is_connected<M: MatrixView + ?Sized>(c: &M, directed: bool) -> Result<bool, AssessmentError> {
    let components = if directed {
        strongly_connected_components(c)?
    } else {
        weakly_connected_components(c)?
    };
    debug!(
        directed,
        n_components = components.len(),
        "connectivity assessed"
    );
    Ok(components.len() <= 1)
}

fn next_edge(from: usize, entries: &mut RowEntries<'_>) -> Option<usize> {
    entries
        .find(|&(j, w)| j != from && w != 0.0)
        .map(|(j, _)| j)
}

fn sort_components(components: &mut [Vec<usize>]) {
    for comp in components.iter_mut() {
        comp.sort_unstable();
    }
    components.sort_unstable_by_key(|comp| comp[0]);
}

/// Strongly connected components of the graph of `c`.
///
/// Uses an iterative form of Tarjan's algorithm, so deep graphs do not
/// overflow the call stack. Each component is sorted ascending and the
/// components are ordered by their smallest state.
///
/// # Errors
///
/// Returns [`AssessmentError::NotSquare`] for non-square input.
pub fn strongly_connected_components<M: MatrixView + ?Sized>(
    c: &M,
) -> Result<Vec<Vec<usize>>, AssessmentError> {
    let n = square_dim(c)?;

    let mut index = vec![UNVISITED; n];
    let mut low = vec![0usize; n];
    let mut on_stack = vec![false; n];
    let mut stack: Vec<usize> = Vec::new();
    let mut call: Vec<(usize, RowEntries<'_>)> = Vec::new();
    let mut counter = 0usize;
    let mut components: Vec<Vec<usize>> = Vec::new();

    for root in 0..n {
        if index[root] != UNVISITED {
            continue;
        }
        index[root] = counter;
        low[root] = counter;
        counter += 1;
        stack.push(root);
        on_stack[root] = true;
        call.push((root, c.row_entries(root)));

        while let Some((v, entries)) = call.last_mut() {
            let v = *v;
            match next_edge(v, entries) {
                Some(w) if index[w] == UNVISITED => {
                    index[w] = counter;
                    low[w] = counter;
                    counter += 1;
                    stack.push(w);
                    on_stack[w] = true;
                    call.push((w, c.row_entries(w)));
                }
                Some(w) => {
                    if on_stack[w] {
                        low[v] = low[v].min(index[w]);
                    }
                }
                None => {
                    call.pop();
                    if let Some(&(parent, _)) = call.last() {
                        low[parent] = low[parent].min(low[v]);
                    }
                    if low[v] == index[v] {
                        let mut comp = Vec::new();
                        while let Some(w) = stack.pop() {
                            on_stack[w] = false;
                            comp.push(w);
                            if w == v {
                                break;
                            }
                        }
                        components.push(comp);
                    }
                }
            }
        }
    }

    sort_components(&mut components);
    Ok(components)
}

/// Connected components of the symmetrized graph of `c`.
///
/// An edge joins `i` and `j` if either `C[i, j]` or `C[j, i]` is nonzero.
/// The only auxiliary structure is a reverse adjacency list; forward edges
/// are read from `c` directly. Ordering follows
/// [`strongly_connected_components`].
///
/// # Errors
///
/// Returns [`AssessmentError::NotSquare`] for non-square input.
pub fn weakly_connected_components<M: MatrixView + ?Sized>(
    c: &M,
) -> Result<Vec<Vec<usize>>, AssessmentError> {
    let n = square_dim(c)?;

    let mut reverse: Vec<Vec<usize>> = vec![Vec::new(); n];
    for i in 0..n {
        let mut entries = c.row_entries(i);
        while let Some(j) = next_edge(i, &mut entries) {
            reverse[j].push(i);
        }
    }

    let mut seen = vec![false; n];
    let mut queue = VecDeque::new();
    let mut components: Vec<Vec<usize>> = Vec::new();

    for root in 0..n {
        if seen[root] {
            continue;
        }
        seen[root] = true;
        queue.push_back(root);
        let mut comp = Vec::new();

        while let Some(v) = queue.pop_front() {
            comp.push(v);
            let mut entries = c.row_entries(v);
            while let Some(w) = next_edge(v, &mut entries) {
                if !seen[w] {
                    seen[w] = true;
                    queue.push_back(w);
                }
            }
            for &w in &reverse[v] {
                if !seen[w] {
                    seen[w] = true;
                    queue.push_back(w);
                }
            }
        }
        components.push(comp);
    }

    sort_components(&mut components);
    Ok(components)
}
