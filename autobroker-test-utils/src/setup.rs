/// Creates a [`TestContext`](crate::TestContext) with tables for the provided entities.
#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestContext::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestContext::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Creates a [`TestContext`](crate::TestContext) with every broker table, plus any extra
/// entities provided.
#[macro_export]
macro_rules! test_setup_with_broker_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestBuilder::new().with_broker_tables().build().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        $crate::TestBuilder::new()
            .with_broker_tables()
            $(.with_table($entity))+
            .build()
            .await
    }};
}
