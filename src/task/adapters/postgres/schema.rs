//! Diesel schema for task and group persistence.

diesel::table! {
    /// Named task groups.
    groups (id) {
        /// Store-assigned group identifier.
        id -> Int8,
        /// Unique group name.
        name -> Text,
    }
}

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Store-assigned task identifier.
        id -> Int8,
        /// Task name.
        name -> Text,
        /// Free-text description.
        description -> Text,
        /// Creation timestamp.
        created -> Timestamptz,
        /// Task status.
        #[max_length = 32]
        status -> Varchar,
        /// Optional group reference.
        group_id -> Nullable<Int8>,
    }
}

diesel::joinable!(tasks -> groups (group_id));
diesel::allow_tables_to_appear_in_same_query!(groups, tasks);
