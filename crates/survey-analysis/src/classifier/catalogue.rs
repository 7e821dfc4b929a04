//! Fixed question catalogues, indexed by spreadsheet column.

use survey_core::Cohort;

/// Student questionnaire, 37 columns.
pub const STUDENT_QUESTIONS: [&str; 37] = [
    "Informazioni cronologiche",
    "Inserisci un codice di 6 caratteri costituito dalle ultime 4 lettere del cognome di tua madre, seguite dal suo giorno di nascita nel formato gg.",
    "Quanti anni hai?",
    "Il tuo genere è",
    "Che scuola frequenti",
    "Titolo di studio",
    "Il tuo percorso attuale di studio è di tipo",
    "Su una scala da 1 a 7, quanto ti consideri competente nell'uso pratico di strumenti o tecnologie legati all'intelligenza artificiale?",
    "Su una scala da 1 a 7, quanto ritieni adeguata la tua competenza teorica riguardo l'intelligenza artificiale?",
    "Da una scala da 1 a 7, quanto pensi che l'intelligenza artificiale cambierà il tuo modo di studiare?",
    "Su una scala da 1 a 7, quanto ritieni adeguata la formazione ricevuta in merito all'intelligenza artificiale?",
    "Da una scala da 1 a 7, quanto sei fiducioso nell'integrazione dell'intelligenza artificiale nella scuola o università?",
    "Su una scala da 1 a 7, quanto ritieni che i tuoi attuali insegnanti siano preparati e competenti nell'insegnare l'uso dell'intelligenza artificiale?",
    "Da una scala da 1 a 7, ti preoccupa l'inserimento dell'intelligenza artificiale nella scuola o nell'università?",
    "Da una scala da 1 a 7, quanto sei preoccupato riguardo all'utilizzo dell'intelligenza artificiale da parte dei tuoi compagni di scuola o universitarì?",
    "Nella tua vita quotidiana utilizzi l'intelligenza artificiale?",
    "Se sì, quante ore alla settimana, in media, utilizzi strumenti di intelligenza artificiale per le tue attività quotidiane?",
    "Se no, puoi spiegare perché non la utilizzi?",
    "Utilizzi l'intelligenza artificiale nello studio?",
    "Quante ore alla settimana mediamente utilizzi l'intelligenza artificiale per le tue attività quotidiane?",
    "Quante ore alla settimana mediamente utilizzi l'intelligenza artificiale per le attività riguardanti lo studio?",
    "Quante ore alla settimana mediamente dedichi ad informarti sui nuovi strumenti di intelligenza artificiale per lo studio?",
    "Sapresti quante ore ti fa risparmiare l'uso dell'intelligenza artificiale nel tuo studio in una settimana?",
    "Quali sono gli strumenti di intelligenza artificiale che utilizzi?",
    "Per quali scopi usi l'intelligenza artificiale nei tuoi studi?",
    "Per quali tipi di attività NON deve essere utilizzata l'intelligenza artificiale per apprendere?",
    "Quali strumenti di intelligenza artificiale utilizzi regolarmente nel tuo studio?",
    "Quali sono i tuoi strumenti preferiti e perché?",
    "In che modo utilizzi l'intelligenza artificiale per personalizzare il tuo studio?",
    "Puoi darci uno o più esempi di prompt che utilizzi?",
    "In che modo l'intelligenza artificiale ti aiuta a migliorare ad apprendere?",
    "Puoi fornire esempi specifici di come l'IA ha migliorato il tuo apprendimento?",
    "Quali difficoltà hai incontrato nell'implementazione di strumenti di IA nella tua pratica di studio?",
    "Puoi spiegare in maniera più dettagliata perché non utilizzi l'IA nello studio?",
    "In base alla tua esperiezia, quali sono i pro e i contro dell'uso dell'intelligenza artificiale nello studio?",
    "Secondo la tua esperienza, quali pratiche che utilizzano l'intelligenza artificiale NON sono raccomandate o NON dovrebbero essere usate per lo studio?",
    "Secondo te come è possibile migliorare questo questionario? Ci sono delle cose che cambieresti? o che leveresti?",
];

/// Teacher questionnaire, 38 columns.
pub const TEACHER_QUESTIONS: [&str; 38] = [
    "Informazioni cronologiche",
    "Inserisci un codice di 6 caratteri costituito dalle ultime 4 lettere del cognome di tua madre, seguite dal suo giorno di nascita nel formato gg.",
    "Attualmente insegni o hai intenzione di intraprendere la professione docente?",
    "Quanti anni hai?",
    "Il tuo genere è",
    "Titolo di studio",
    "In quale ordine di scuola insegni? O vorresti insegnare?",
    "Insegna (o insegnerà) una materia",
    "Qual è il tuo settore scientifico-disciplinare attuale?",
    "Su una scala da 1 a 7, quanto ti consideri competente nell'uso pratico di strumenti o tecnologie legati all'intelligenza artificiale?",
    "Su una scala da 1 a 7, quanto ritieni adeguata la tua competenza teorica riguardo l'intelligenza artificiale?",
    "Da una scala da 1 a 7 quanto pensi che l'intelligenza artificiale cambierà la didattica?",
    "Da una scala da 1 a 7, quanto pensi che l'intelligenza artificiale cambierà la tua didattica?",
    "Su una scala da 1 a 7, quanto ritieni adeguata la formazione ricevuta in merito all'intelligenza artificiale?",
    "Da una scala da 1 a 7, quanto sei fiducioso nell'integrazione dell'intelligenza artificiale nella pratica educativa?",
    "Da una scala da 1 a 7, quanto sei fiducioso nell'utilizzo da parte degli studenti di un uso responsabile e maturo dell'intelligenza artificiale?",
    "Da una scala da 1 a 7, quanto sei preoccupato riguardo all'utilizzo dell'intelligenza artificiale nel mondo dell'educazione?",
    "Da una scala da 1 a 7, quanto sei preoccupato riguardo all'utilizzo dell'intelligenza artificiale da parte degli studenti?",
    "Per quali tipi di attività NON deve essere utilizzata l'intelligenza artificiale nell'insegnamento?",
    "Nella tua vita quotidiana utilizzi l'intelligenza artificiale?",
    "Se sì, quante ore alla settimana, in media, utilizzi strumenti di intelligenza artificiale per le tue attività quotidiane?",
    "Se no, puoi spiegare perché non la utilizzi?",
    "Utilizzi l'intelligenza artificiale nella didattica?",
    "Quante ore alla settimana mediamente dedichi alla formazione e all'aggiornamento sulle tecnologie di intelligenza artificiale per l'insegnamento?",
    "Quante ore alla settimana dedichi mediamente per integrare strumenti di intelligenza artificiale nei tuoi piani di lezione settimanali?",
    "Quali sono gli strumenti di intelligenza artificiale che utilizzi?",
    "Per quali tipi di attività usi l'intelligenza artificiale?",
    "Quali sono i tuoi strumenti preferiti e perché?",
    "In che modo utilizzi l'intelligenza artificiale per individualizzare l'insegnamento?",
    "In che modo utilizzi l'intelligenza artificiale per personalizzare l'insegnamento?",
    "Puoi darci uno o più esempi di prompt che utilizzi?",
    "Puoi fornire esempi specifici di come l'IA ha migliorato l'apprendimento dei tuoi studenti?",
    "In che modo l'intelligenza artificiale ti aiuta a migliorare l'apprendimento dei tuoi studenti?",
    "Quali difficoltà hai incontrato nell'implementazione di strumenti di IA nella tua didattica?",
    "Puoi spiegare in maniera più dettagliata perché non utilizzi l'IA nella didattica?",
    "In base alla tua esperienza, quali sono i pro e i contro dell'uso dell'intelligenza artificiale nell'educazione?",
    "Secondo la tua esperienza, quali pratiche che utilizzano l'intelligenza artificiale NON sono raccomandate o NON dovrebbero essere usate nell'insegnamento?",
    "Secondo te come è possibile migliorare questo questionario?",
];

/// Question texts for `cohort`, indexed by column.
pub fn questions(cohort: Cohort) -> &'static [&'static str] {
    match cohort {
        Cohort::Student => &STUDENT_QUESTIONS,
        Cohort::Teacher => &TEACHER_QUESTIONS,
    }
}

/// Question text at `column`, if the catalogue has one.
pub fn question_text(cohort: Cohort, column: usize) -> Option<&'static str> {
    questions(cohort).get(column).copied()
}
