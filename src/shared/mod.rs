// src/shared/mod.rs

// Declara o submódulo com as structs de resposta compartilhadas
pub mod shared_structs;
// Declara o submódulo com a tradução de erros do banco para respostas HTTP
pub mod erros;
// Apoio aos testes de handler (estado com pool preguiçoso, sem banco real)
#[cfg(test)]
pub mod testes;
