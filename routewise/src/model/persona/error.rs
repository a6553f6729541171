use routewise_core::model::Persona;

#[derive(thiserror::Error, Debug)]
pub enum PersonaRankError {
    #[error("while scoring route {route_id} for persona {persona}, produced non-finite score")]
    NonFiniteScore { route_id: String, persona: Persona },
}
