//! The component-unpacking algorithm.
//!
//! Splits one composite `(Var, Value)` pair into its ordered scalar
//! constituents, slicing the value along the variable's component axis.
//! One call performs exactly one level of decomposition; nested composite
//! structures are unpacked by repeating the call on the yielded pairs.

use ndarray::Axis;

use varmeta_model::{Result, Var, VarError};

use crate::value::Value;

/// Unpack a composite variable's value into per-component pairs.
///
/// Slicing rules:
///
/// - 1-dimensional input is taken as already component-aligned; the
///   component axis is ignored and element `i` maps to component `i`.
/// - For 2+ dimensions, the component axis must be in range and the length
///   along it must equal the component count; slice `i` is the sub-value
///   at index `i` on that axis with all other axes preserved.
/// - Plain sequences come back as plain sequences, arrays as arrays.
///
/// Errors: [`VarError::InvalidOperation`] when `var` has no components;
/// [`VarError::InvalidInput`] for scalar or 0-dimensional data, an axis
/// out of range, or a component-count mismatch.
pub fn unpack(var: &Var, data: &Value) -> Result<Vec<(Var, Value)>> {
    if !var.is_composite() {
        return Err(VarError::InvalidOperation(format!(
            "variable '{}' has no components to unpack",
            var.key()
        )));
    }
    let component_vars = var.component_vars();
    let slices = match data {
        Value::List(items) => unpack_list(var, items, component_vars.len())?,
        Value::Array(array) => unpack_array(var, array, component_vars.len())?,
        scalar => {
            return Err(VarError::InvalidInput(format!(
                "cannot unpack scalar {} value for variable '{}'",
                scalar.kind(),
                var.key()
            )));
        }
    };
    Ok(component_vars.into_iter().zip(slices).collect())
}

fn unpack_array(var: &Var, array: &ndarray::ArrayD<f64>, count: usize) -> Result<Vec<Value>> {
    let ndim = array.ndim();
    if ndim == 0 {
        return Err(VarError::InvalidInput(format!(
            "cannot unpack 0-dimensional array for variable '{}'",
            var.key()
        )));
    }
    // 1-d arrays are already component-aligned; the axis only matters
    // once there is more than one axis to choose from.
    let axis = if ndim == 1 { 0 } else { var.component_axis() };
    if axis >= ndim {
        return Err(VarError::InvalidInput(format!(
            "component axis {axis} out of range for {ndim}-dimensional data of variable '{}'",
            var.key()
        )));
    }
    let len = array.len_of(Axis(axis));
    if len != count {
        return Err(VarError::InvalidInput(format!(
            "variable '{}' declares {count} components but data has length {len} along axis {axis}",
            var.key()
        )));
    }
    let slices = if ndim == 1 {
        // Slicing a 1-d array yields bare elements.
        array.iter().map(|x| Value::Float(*x)).collect()
    } else {
        (0..len)
            .map(|i| Value::Array(array.index_axis(Axis(axis), i).to_owned()))
            .collect()
    };
    Ok(slices)
}

fn unpack_list(var: &Var, items: &[Value], count: usize) -> Result<Vec<Value>> {
    let shape = list_shape(items);
    let ndim = shape.len();
    let axis = if ndim == 1 { 0 } else { var.component_axis() };
    if axis >= ndim {
        return Err(VarError::InvalidInput(format!(
            "component axis {axis} out of range for {ndim}-dimensional data of variable '{}'",
            var.key()
        )));
    }
    if shape[axis] != count {
        return Err(VarError::InvalidInput(format!(
            "variable '{}' declares {count} components but data has length {} along axis {axis}",
            var.key(),
            shape[axis]
        )));
    }
    (0..count).map(|i| slice_axis(var, items, axis, i)).collect()
}

/// Shape of a uniformly nested sequence.
///
/// Descends as long as every element at the current depth is a sequence of
/// the same length; ragged or mixed levels stop the descent, so the shape
/// covers only the uniform prefix of the nesting.
fn list_shape(items: &[Value]) -> Vec<usize> {
    let mut shape = vec![items.len()];
    let mut level: Vec<&[Value]> = vec![items];
    loop {
        let mut next: Vec<&[Value]> = Vec::new();
        let mut width: Option<usize> = None;
        for seq in &level {
            for item in *seq {
                let Value::List(inner) = item else {
                    return shape;
                };
                match width {
                    None => width = Some(inner.len()),
                    Some(expected) if expected == inner.len() => {}
                    Some(_) => return shape,
                }
                next.push(inner);
            }
        }
        match width {
            Some(width) => shape.push(width),
            None => return shape,
        }
        level = next;
    }
}

fn slice_axis(var: &Var, items: &[Value], axis: usize, index: usize) -> Result<Value> {
    if axis == 0 {
        return Ok(items[index].clone());
    }
    items
        .iter()
        .map(|item| match item {
            Value::List(inner) => slice_axis(var, inner, axis - 1, index),
            other => Err(VarError::InvalidInput(format!(
                "ragged nested sequence for variable '{}': expected a sequence, got {}",
                var.key(),
                other.kind()
            ))),
        })
        .collect::<Result<Vec<Value>>>()
        .map(Value::List)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_shape_stops_at_ragged_level() {
        let items = vec![
            Value::List(vec![Value::Int(1), Value::Int(2)]),
            Value::List(vec![Value::Int(3)]),
        ];
        assert_eq!(list_shape(&items), vec![2]);
    }

    #[test]
    fn list_shape_uniform() {
        let items = vec![
            Value::List(vec![Value::Int(1), Value::Int(2)]),
            Value::List(vec![Value::Int(3), Value::Int(4)]),
            Value::List(vec![Value::Int(5), Value::Int(6)]),
        ];
        assert_eq!(list_shape(&items), vec![3, 2]);
    }
}
