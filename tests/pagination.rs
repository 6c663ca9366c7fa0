use shopmate::routes::params::Pagination;

#[test]
fn defaults_and_clamping() {
    let (page, per_page, offset) = Pagination::default().normalize();
    assert_eq!((page, per_page, offset), (1, 20, 0));

    let wild = Pagination {
        page: Some(-4),
        per_page: Some(1_000),
    };
    assert_eq!(wild.normalize(), (1, 100, 0));
}

#[test]
fn apply_cuts_the_requested_page() {
    let pagination = Pagination {
        page: Some(2),
        per_page: Some(2),
    };
    let (items, meta) = pagination.apply(vec![1, 2, 3, 4, 5]);

    assert_eq!(items, vec![3, 4]);
    assert_eq!(meta.page, Some(2));
    assert_eq!(meta.total, Some(5));
}

#[test]
fn huge_page_number_gives_an_empty_page() {
    let pagination = Pagination {
        page: Some(i64::MAX),
        per_page: Some(100),
    };
    let (items, meta) = pagination.apply(vec![1, 2, 3]);

    assert!(items.is_empty());
    assert_eq!(meta.page, Some(i64::MAX));
    assert_eq!(meta.total, Some(3));
}
