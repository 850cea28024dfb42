use refbind_core::{Param, Storage, Ty};

use crate::factory::{Element, Forward, construction_plan, element_types};

#[test]
fn preserves_order_and_arity() {
    let params = vec![
        Param::direct(Ty::named("int")),
        Param::direct(Ty::ref_mark(Ty::named("double"))),
        Param::direct(Ty::named("int")),
    ];
    let elements = element_types(&params);
    assert_eq!(
        elements,
        vec![
            Storage::Value(Ty::named("int")),
            Storage::Alias(Ty::named("double")),
            Storage::Value(Ty::named("int")),
        ]
    );
}

#[test]
fn empty_argument_list() {
    assert!(element_types(&[]).is_empty());
    assert!(construction_plan(&[]).is_empty());
}

#[test]
fn elements_are_independent() {
    // A marker argument has no effect on its neighbors.
    let lone = element_types(&[Param::direct(Ty::named("int"))]);
    let mixed = element_types(&[
        Param::direct(Ty::ref_mark(Ty::named("double"))),
        Param::direct(Ty::named("int")),
    ]);
    assert_eq!(lone[0], mixed[1]);
}

#[test]
fn direct_and_lvalue_values_copy() {
    let plan = construction_plan(&[
        Param::direct(Ty::named("int")),
        Param::lvalue(Ty::named("int")),
    ]);
    assert_eq!(plan[0].forward, Forward::Copy);
    assert_eq!(plan[1].forward, Forward::Copy);
}

#[test]
fn rvalue_values_move() {
    let plan = construction_plan(&[Param::rvalue(Ty::named("string"))]);
    assert_eq!(
        plan[0],
        Element {
            storage: Storage::Value(Ty::named("string")),
            forward: Forward::Move,
        }
    );
}

#[test]
fn markers_bind_under_any_binding() {
    let marked = Ty::ref_mark(Ty::named("int"));
    let plan = construction_plan(&[
        Param::direct(marked.clone()),
        Param::lvalue(marked.clone()),
        Param::rvalue(marked),
    ]);
    for element in &plan {
        assert_eq!(element.forward, Forward::Bind);
        assert_eq!(element.storage, Storage::Alias(Ty::named("int")));
    }
}

#[test]
fn plan_storage_matches_element_types() {
    let params = vec![
        Param::rvalue(Ty::named("int")),
        Param::direct(Ty::ref_mark(Ty::named("double"))),
        Param::direct(Ty::array(Ty::named("char"), Some(4))),
    ];
    let storages = element_types(&params);
    let plan = construction_plan(&params);
    let plan_storages: Vec<_> = plan.into_iter().map(|e| e.storage).collect();
    assert_eq!(storages, plan_storages);
}

#[test]
fn element_report_shape() {
    // The CLI serializes plans directly; keep the wire shape stable.
    let plan = construction_plan(&[Param::direct(Ty::ref_mark(Ty::named("int")))]);
    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {
                "storage": {
                    "alias": {
                        "quals": {"const": false, "volatile": false},
                        "kind": {"named": "int"}
                    }
                },
                "forward": "bind"
            }
        ])
    );
}
