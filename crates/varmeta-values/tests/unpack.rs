//! Tests for the component-unpacking algorithm.

use ndarray::{arr1, arr2, ArrayD, IxDyn};

use varmeta_model::{Var, VarError};
use varmeta_values::{unpack, Value};

fn force_xyz() -> Var {
    Var::new("F", "Force", "N", "Force vector").with_components(["x", "y", "z"])
}

fn row(a: i64, b: i64) -> Value {
    Value::from_iter([a, b])
}

fn grid() -> Value {
    Value::List(vec![row(10, 11), row(20, 21), row(30, 31)])
}

#[test]
fn list_unpack_default_axis() {
    let pairs = unpack(&force_xyz(), &grid()).expect("unpack");
    assert_eq!(pairs.len(), 3);
    assert_eq!(pairs[0].0.name(), "Force x");
    assert_eq!(pairs[0].1, row(10, 11));
    assert_eq!(pairs[1].0.name(), "Force y");
    assert_eq!(pairs[1].1, row(20, 21));
    assert_eq!(pairs[2].0.name(), "Force z");
    assert_eq!(pairs[2].1, row(30, 31));
}

#[test]
fn list_unpack_axis_one() {
    let force = Var::new("F", "Force", "N", "Force vector")
        .with_components(["x", "y"])
        .with_component_axis(1);
    let pairs = unpack(&force, &grid()).expect("unpack");
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].1, Value::from_iter([10i64, 20, 30]));
    assert_eq!(pairs[1].1, Value::from_iter([11i64, 21, 31]));
}

#[test]
fn one_dimensional_input_ignores_axis() {
    let force = force_xyz().with_component_axis(1);
    let data = Value::from_iter([10i64, 20, 30]);
    let pairs = unpack(&force, &data).expect("unpack");
    let values: Vec<&Value> = pairs.iter().map(|(_, v)| v).collect();
    assert_eq!(
        values,
        vec![&Value::Int(10), &Value::Int(20), &Value::Int(30)]
    );
    let keys: Vec<&str> = pairs.iter().map(|(v, _)| v.key()).collect();
    assert_eq!(keys, vec!["F_x", "F_y", "F_z"]);
}

#[test]
fn scalar_input_is_rejected() {
    let err = unpack(&force_xyz(), &Value::Float(1.5)).unwrap_err();
    assert!(matches!(err, VarError::InvalidInput(_)));
}

#[test]
fn non_composite_var_is_rejected() {
    let temp = Var::new("temp", "Temperature", "Celsius", "Ambient temperature");
    let data = Value::from_iter([1i64, 2, 3]);
    let err = unpack(&temp, &data).unwrap_err();
    assert!(matches!(err, VarError::InvalidOperation(_)));
}

#[test]
fn axis_out_of_range_is_rejected() {
    let force = Var::new("F", "Force", "N", "Force vector")
        .with_components(["x", "y"])
        .with_component_axis(2);
    let err = unpack(&force, &grid()).unwrap_err();
    assert!(matches!(err, VarError::InvalidInput(_)));
}

#[test]
fn component_count_mismatch_is_rejected() {
    let force = Var::new("F", "Force", "N", "Force vector").with_components(["x", "y"]);
    let err = unpack(&force, &grid()).unwrap_err();
    assert!(matches!(err, VarError::InvalidInput(_)));
}

#[test]
fn array_unpack_default_axis() {
    let data = Value::Array(arr2(&[[10.0, 11.0], [20.0, 21.0], [30.0, 31.0]]).into_dyn());
    let pairs = unpack(&force_xyz(), &data).expect("unpack");
    assert_eq!(pairs.len(), 3);
    assert_eq!(pairs[0].1, Value::Array(arr1(&[10.0, 11.0]).into_dyn()));
    assert_eq!(pairs[1].1, Value::Array(arr1(&[20.0, 21.0]).into_dyn()));
    assert_eq!(pairs[2].1, Value::Array(arr1(&[30.0, 31.0]).into_dyn()));
}

#[test]
fn array_unpack_axis_one() {
    let force = Var::new("F", "Force", "N", "Force vector")
        .with_components(["x", "y"])
        .with_component_axis(1);
    let data = Value::Array(arr2(&[[10.0, 11.0], [20.0, 21.0], [30.0, 31.0]]).into_dyn());
    let pairs = unpack(&force, &data).expect("unpack");
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].1, Value::Array(arr1(&[10.0, 20.0, 30.0]).into_dyn()));
    assert_eq!(pairs[1].1, Value::Array(arr1(&[11.0, 21.0, 31.0]).into_dyn()));
}

#[test]
fn one_dimensional_array_yields_scalars() {
    let data = Value::Array(arr1(&[10.0, 20.0, 30.0]).into_dyn());
    let pairs = unpack(&force_xyz(), &data).expect("unpack");
    let values: Vec<&Value> = pairs.iter().map(|(_, v)| v).collect();
    assert_eq!(
        values,
        vec![
            &Value::Float(10.0),
            &Value::Float(20.0),
            &Value::Float(30.0)
        ]
    );
}

#[test]
fn zero_dimensional_array_is_rejected() {
    let data = Value::Array(ArrayD::from_elem(IxDyn(&[]), 5.0));
    let err = unpack(&force_xyz(), &data).unwrap_err();
    assert!(matches!(err, VarError::InvalidInput(_)));
}

#[test]
fn unpack_is_single_level() {
    // Unpacking a 3-d value leaves 2-d slices; decomposing further takes
    // another call on the yielded pairs.
    let cube = Value::List(vec![grid(), grid()]);
    let pair = Var::new("G", "Grids", "N", "Stacked grids").with_components(["a", "b"]);
    let pairs = unpack(&pair, &cube).expect("unpack");
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].1, grid());
}
