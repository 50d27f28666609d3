//! Prompt templates for menu generation

use crate::course::idea::CourseIdea;
use crate::menu::entities::BudgetContext;
use crate::menu::style::VariantStyle;

/// Templates for the generation model's system and user prompts
pub struct MenuPromptTemplate;

impl MenuPromptTemplate {
    /// System prompt for the menu-generation model
    pub fn system() -> &'static str {
        r#"You are an executive chef designing five-course tasting menus for private dinners.
Every menu has exactly five courses served in this order: Amuse-Bouche, First Course, Second Course, Main Course, Dessert.
Write concise, appetizing dish names. Suggest wine pairings where a pairing is poured.
Respond with JSON only."#
    }

    /// Instruction block describing the host's own courses.
    ///
    /// Returns an empty string when the host supplied no custom text, or
    /// text that holds no ideas, which lets the generator design menus freely.
    pub fn custom_courses(raw_text: &str, ideas: &[CourseIdea]) -> String {
        if raw_text.trim().is_empty() || ideas.is_empty() {
            return String::new();
        }

        let mut prompt = String::from(
            "CUSTOM COURSES FROM THE HOST\n\
             The host has described the courses they want:\n",
        );

        for (i, idea) in ideas.iter().enumerate() {
            prompt.push_str(&format!("Course {}: {}\n", i + 1, idea));
        }

        prompt.push_str(&format!(
            r#"
Requirements for every menu:
1. Keep all {} of the host's courses, in the order given, each in the course position it belongs to.
2. Vary only the preparation, technique and presentation. Never replace the host's dish with a different one.
3. Start each of those course names with the host's original text, then append the style descriptor (for example "Seared scallops with brown butter and capers").
4. Apply one style lens per menu:
"#,
            ideas.len()
        ));

        for style in VariantStyle::all() {
            prompt.push_str(&format!("   - {}: {}\n", style.label, style.description));
        }

        prompt
    }

    /// Full user prompt for one generation request
    pub fn generation_prompt(budget: &BudgetContext, custom_courses: &str) -> String {
        let mut prompt = format!(
            r#"Design five tasting menus for a private dinner.

Food budget: {}
Wine budget: {}

Create one menu for each style:
"#,
            budget.food_cost(),
            budget.wine_cost()
        );

        for style in VariantStyle::all() {
            prompt.push_str(&format!("{}. {}: {}\n", style.id, style.label, style.description));
        }

        if !custom_courses.is_empty() {
            prompt.push('\n');
            prompt.push_str(custom_courses);
        }

        prompt.push_str(
            r#"
Return JSON in exactly this shape:
{"menus": [
  {"id": 1, "style": "Classic", "description": "...",
   "courses": [
     {"course": "Amuse-Bouche", "name": "...", "wine": null},
     {"course": "First Course", "name": "...", "wine": "..."},
     {"course": "Second Course", "name": "...", "wine": null},
     {"course": "Main Course", "name": "...", "wine": "..."},
     {"course": "Dessert", "name": "...", "wine": "..."}
   ],
   "food_cost": "...", "wine_cost": "..."}
]}"#,
        );

        prompt
    }
}
