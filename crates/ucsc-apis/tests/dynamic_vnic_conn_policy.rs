//! Dynamic vNIC connection policy lifecycle against the simulated appliance.

mod common;

use anyhow::Result;
use ucsc_apis::dynamic_vnic_conn_policy::{
    dynamic_vnic_conn_policy_create, dynamic_vnic_conn_policy_delete,
    dynamic_vnic_conn_policy_exists, dynamic_vnic_conn_policy_get,
    dynamic_vnic_conn_policy_modify, DynamicVnicConnPolicyOptions,
};
use ucsc_apis::org_dn;
use ucsc_core::dn::DistinguishedName;
use ucsc_core::PropertyMap;

#[test]
fn test_dynamic_vnic_conn_policy_lifecycle() -> Result<()> {
    let mut harness = common::custom_setup();
    let session = &mut *harness.session;
    let org = DistinguishedName::org_root();

    let options = DynamicVnicConnPolicyOptions {
        descr: Some("Testing Descr".to_string()),
        ..DynamicVnicConnPolicyOptions::default()
    };
    let mo = dynamic_vnic_conn_policy_create(session, "test_dynavnic", &org, &options)?;
    assert_eq!(mo.dn().as_str(), "org-root/dynamic-con-test_dynavnic");
    assert_eq!(mo.get("dynamic_eth"), Some("54"));
    assert_eq!(mo.get("protection"), Some("protected"));

    let expected = PropertyMap::new().with("descr", "Testing Descr");
    let (found, _) =
        dynamic_vnic_conn_policy_exists(session, "test_dynavnic", &org, &expected)?;
    assert!(found);

    // Creating again updates the existing policy.
    let options = DynamicVnicConnPolicyOptions {
        dynamic_eth: Some("32".to_string()),
        ..DynamicVnicConnPolicyOptions::default()
    };
    let mo = dynamic_vnic_conn_policy_create(session, "test_dynavnic", &org, &options)?;
    assert_eq!(mo.get("dynamic_eth"), Some("32"));
    assert_eq!(mo.get("descr"), Some("Testing Descr"));

    dynamic_vnic_conn_policy_delete(session, "test_dynavnic", &org)?;
    let (found, mo) =
        dynamic_vnic_conn_policy_exists(session, "test_dynavnic", &org, &PropertyMap::new())?;
    assert!(!found);
    assert!(mo.is_none());

    common::custom_teardown(harness);
    Ok(())
}

#[test]
fn test_dynamic_vnic_conn_policy_in_sub_org() -> Result<()> {
    let mut harness = common::custom_setup();
    let session = &mut *harness.session;

    ucsc_apis::org::org_create(
        session,
        "lab",
        &DistinguishedName::org_root(),
        None,
        &PropertyMap::new(),
    )?;
    let lab = org_dn(&["lab"])?;

    dynamic_vnic_conn_policy_create(
        session,
        "lab_dynavnic",
        &lab,
        &DynamicVnicConnPolicyOptions::default(),
    )?;
    let modified = dynamic_vnic_conn_policy_modify(
        session,
        "lab_dynavnic",
        &lab,
        &PropertyMap::new().with("protection", "protected-pref-a"),
    )?;
    assert_eq!(
        modified.dn().as_str(),
        "org-root/org-lab/dynamic-con-lab_dynavnic"
    );
    assert_eq!(modified.get("protection"), Some("protected-pref-a"));
    assert_eq!(modified.get("dynamic_eth"), Some("54"));

    // Not visible from org-root.
    let root = DistinguishedName::org_root();
    assert!(dynamic_vnic_conn_policy_get(session, "lab_dynavnic", &root)?.is_none());

    common::custom_teardown(harness);
    Ok(())
}
