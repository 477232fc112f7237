/// Storage key under which the serialized plan is kept.
pub const PLAN_STORAGE_KEY: &str = "meal-plan";

/// Default file name for exported plans.
pub const DEFAULT_EXPORT_FILE: &str = "meal-plan.csv";

/// Default file backing the key-value store.
pub const DEFAULT_STATE_FILE: &str = "meal_plan_state.json";

/// Built-in catalog used when no catalog file is supplied.
pub const DEFAULT_MEALS: &[&str] = &[
    "Lentil stew",
    "Chickpea curry",
    "Grilled salmon with potatoes",
    "Chicken and vegetable stir-fry",
    "Spanish omelette with salad",
    "Paella",
    "Gazpacho with toast",
    "Baked cod with peppers",
    "Spaghetti bolognese",
    "Vegetable lasagna",
    "Beef stew",
    "Stuffed peppers",
    "Quinoa salad",
    "Mushroom risotto",
    "Turkey burgers",
    "Tuna pasta salad",
    "Minestrone soup",
    "Roast chicken with rice",
    "Black bean tacos",
    "Spinach and feta pie",
    "Pumpkin cream soup",
    "Pork loin with apple",
    "Hake in green sauce",
    "Caesar salad",
];

/// Minimum number of meals a working pool must hold to fill one day.
pub const MIN_POOL_PER_DAY: usize = crate::models::SLOTS_PER_DAY;
